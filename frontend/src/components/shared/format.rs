//! Display helpers: money, icons, and status colors.

use common::model::campaign::{CampaignStatus, Platform};
use num_format::{Locale, ToFormattedString};

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Dollar amount with thousands separators and at most two decimals,
/// trailing zeros dropped: `1500.0` → `$1,500`, `99.5` → `$99.5`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_formatted_string(&Locale::en);
    let fraction = cents % 100;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    let decimals = match fraction {
        0 => String::new(),
        f if f % 10 == 0 => format!(".{}", f / 10),
        f => format!(".{f:02}"),
    };
    format!("{sign}${whole}{decimals}")
}

pub fn platform_icon(platform: Platform) -> &'static str {
    match platform {
        Platform::Instagram => "📸",
        Platform::Facebook => "👥",
        Platform::Twitter => "🐦",
        Platform::Linkedin => "💼",
        Platform::Tiktok => "🎵",
        Platform::Youtube => "▶️",
        Platform::Other => "🌐",
    }
}

/// CSS class of the status badge in tables and the detail view.
pub fn status_badge_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Draft => "badge badge-gray",
        CampaignStatus::Scheduled => "badge badge-blue",
        CampaignStatus::Active => "badge badge-green",
        CampaignStatus::Paused => "badge badge-yellow",
        CampaignStatus::Completed => "badge badge-purple",
        CampaignStatus::Cancelled => "badge badge-red",
    }
}

const FALLBACK_COLOR: &str = "#6b7280";

/// Chart fill for a status as it appears in aggregate payloads.
pub fn status_color(status: &str) -> &'static str {
    match CampaignStatus::parse(status) {
        Some(CampaignStatus::Draft) => "#9ca3af",
        Some(CampaignStatus::Scheduled) => "#3b82f6",
        Some(CampaignStatus::Active) => "#22c55e",
        Some(CampaignStatus::Paused) => "#f59e0b",
        Some(CampaignStatus::Completed) => "#8b5cf6",
        Some(CampaignStatus::Cancelled) => "#ef4444",
        None => FALLBACK_COLOR,
    }
}

const PLATFORM_PALETTE: [&str; 7] = [
    "#e1306c", "#1877f2", "#1da1f2", "#0077b5", "#ff0050", "#ff0000", FALLBACK_COLOR,
];

/// Bar color by position, cycling through the palette.
pub fn palette_color(index: usize) -> &'static str {
    PLATFORM_PALETTE[index % PLATFORM_PALETTE.len()]
}
