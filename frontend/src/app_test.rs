use super::*;

#[test]
fn starts_on_campaigns_with_menu_closed() {
    let state = AppState::default();
    assert_eq!(state.page, Page::Campaigns);
    assert!(!state.menu_open);
}

#[test]
fn navigating_from_mobile_menu_closes_it() {
    let mut state = AppState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    assert!(state.navigate(Page::News));
    assert_eq!(state.page, Page::News);
    assert!(!state.menu_open);
}

#[test]
fn navigating_to_current_page_is_a_no_op() {
    let mut state = AppState::default();
    assert!(!state.navigate(Page::Campaigns));
}

#[test]
fn reselecting_current_page_still_closes_menu() {
    let mut state = AppState::default();
    state.toggle_menu();
    assert!(state.navigate(Page::Campaigns));
    assert!(!state.menu_open);
}

#[test]
fn page_titles() {
    let titles: Vec<_> = Page::ALL.iter().map(|p| p.title()).collect();
    assert_eq!(
        titles,
        vec!["Campaign Tracker", "Analytics Dashboard", "Content Inspiration"]
    );
}
