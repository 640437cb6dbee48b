use super::*;

#[test]
fn currency_groups_thousands() {
    assert_eq!(format_currency(1500.0), "$1,500");
    assert_eq!(format_currency(1234567.0), "$1,234,567");
}

#[test]
fn currency_keeps_significant_decimals() {
    assert_eq!(format_currency(99.99), "$99.99");
    assert_eq!(format_currency(10.5), "$10.5");
    assert_eq!(format_currency(0.05), "$0.05");
}

#[test]
fn currency_of_zero_and_nan() {
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(f64::NAN), "$0");
}

#[test]
fn negative_currency_has_leading_sign() {
    assert_eq!(format_currency(-12.0), "-$12");
}

#[test]
fn unknown_status_gets_fallback_color() {
    assert_eq!(status_color("active"), "#22c55e");
    assert_eq!(status_color("archived"), "#6b7280");
}

#[test]
fn palette_cycles() {
    assert_eq!(palette_color(0), palette_color(7));
}
