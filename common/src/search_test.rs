use super::*;

/// Replays keystrokes, firing every timer that was scheduled and collecting
/// the queries that would have been fetched.
fn type_then_pause(search: &mut NewsSearch, keystrokes: &[&str]) -> Vec<String> {
    let tokens: Vec<u64> = keystrokes
        .iter()
        .filter_map(|k| search.set_input((*k).to_string()))
        .collect();
    tokens
        .into_iter()
        .filter_map(|t| search.debounce_elapsed(t))
        .collect()
}

// =============================================================
// Debounce
// =============================================================

#[test]
fn starts_with_default_query() {
    let search = NewsSearch::default();
    assert_eq!(search.query(), "social media marketing");
    assert_eq!(search.input(), "social media marketing");
}

#[test]
fn burst_of_keystrokes_fetches_final_value_once() {
    let mut search = NewsSearch::default();
    let fetched = type_then_pause(&mut search, &["t", "ti", "tik", "tiktok "]);
    assert_eq!(fetched, vec!["tiktok".to_string()]);
    assert_eq!(search.query(), "tiktok");
}

#[test]
fn pause_after_each_key_fetches_each_value() {
    let mut search = NewsSearch::default();
    let t1 = search.set_input("seo".into()).unwrap();
    assert_eq!(search.debounce_elapsed(t1).as_deref(), Some("seo"));
    let t2 = search.set_input("seo tips".into()).unwrap();
    assert_eq!(search.debounce_elapsed(t2).as_deref(), Some("seo tips"));
}

#[test]
fn intermediate_timer_is_ignored() {
    let mut search = NewsSearch::default();
    let stale = search.set_input("ads".into()).unwrap();
    let latest = search.set_input("ads q3".into()).unwrap();
    assert_eq!(search.debounce_elapsed(stale), None);
    assert_eq!(search.debounce_elapsed(latest).as_deref(), Some("ads q3"));
}

#[test]
fn retyping_current_query_schedules_nothing() {
    let mut search = NewsSearch::default();
    assert_eq!(search.set_input(" social media marketing ".into()), None);
}

#[test]
fn blank_input_never_commits() {
    let mut search = NewsSearch::default();
    let token = search.set_input("   ".into()).unwrap();
    assert_eq!(search.debounce_elapsed(token), None);
    assert_eq!(search.query(), "social media marketing");
}

#[test]
fn returning_to_committed_query_cancels_pending_timer() {
    let mut search = NewsSearch::default();
    let pending = search.set_input("social media".into()).unwrap();
    assert_eq!(search.set_input("social media marketing".into()), None);
    assert_eq!(search.debounce_elapsed(pending), None);
}

// =============================================================
// Immediate commits
// =============================================================

#[test]
fn submit_commits_without_waiting() {
    let mut search = NewsSearch::default();
    let token = search.set_input("  brand safety ".into()).unwrap();
    assert_eq!(search.submit().as_deref(), Some("brand safety"));
    // The timer still fires later but has nothing new to commit.
    assert_eq!(search.debounce_elapsed(token), None);
}

#[test]
fn submit_of_unchanged_query_does_not_refetch() {
    let mut search = NewsSearch::default();
    assert_eq!(search.submit(), None);
}

#[test]
fn chip_sets_input_and_query() {
    let mut search = NewsSearch::default();
    let pending = search.set_input("something".into()).unwrap();
    assert_eq!(search.choose("tiktok brands").as_deref(), Some("tiktok brands"));
    assert_eq!(search.input(), "tiktok brands");
    assert_eq!(search.debounce_elapsed(pending), None);
    assert_eq!(search.choose("tiktok brands"), None);
}

// =============================================================
// Copy feedback
// =============================================================

#[test]
fn copy_feedback_is_keyed_by_text() {
    let mut feedback = CopyFeedback::default();
    let token = feedback.copied("Same headline".into());
    assert!(feedback.is_copied("Same headline"));
    assert!(!feedback.is_copied("Other"));
    assert!(feedback.expire(token));
    assert!(!feedback.is_copied("Same headline"));
}

#[test]
fn newer_copy_survives_older_expiry() {
    let mut feedback = CopyFeedback::default();
    let first = feedback.copied("A".into());
    let second = feedback.copied("B".into());
    assert!(!feedback.expire(first));
    assert!(feedback.is_copied("B"));
    assert!(feedback.expire(second));
    assert!(!feedback.expire(second));
}
