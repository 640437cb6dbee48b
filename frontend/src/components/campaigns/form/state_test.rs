use super::*;
use common::error::ApiError;
use common::model::campaign::CampaignId;
use serde_json::json;

fn existing() -> Campaign {
    serde_json::from_value(json!({
        "id": 9,
        "title": "Spring Promo",
        "platform": "facebook",
        "status": "active",
        "budget": "300.00",
        "scheduled_date": "2025-04-01"
    }))
    .unwrap()
}

fn filled(form: &mut CampaignForm) {
    form.set(CampaignField::Title, "Launch".into());
}

// =============================================================
// Submission gating
// =============================================================

#[test]
fn empty_title_sends_nothing_and_flags_only_title() {
    let mut form = CampaignForm::new(None);
    assert!(form.begin_submit().is_none());
    assert!(!form.saving);
    assert_eq!(form.errors.fields().collect::<Vec<_>>(), vec!["title"]);
    assert_eq!(form.error(CampaignField::Title), Some("Title is required"));
}

#[test]
fn valid_draft_starts_saving_and_clears_errors() {
    let mut form = CampaignForm::new(None);
    assert!(form.begin_submit().is_none());
    filled(&mut form);
    let payload = form.begin_submit().unwrap();
    assert_eq!(payload.title, "Launch");
    assert_eq!(payload.budget, "0");
    assert!(payload.scheduled_date.is_none());
    assert!(form.saving);
    assert!(form.errors.is_empty());
}

#[test]
fn second_submit_while_saving_is_ignored() {
    let mut form = CampaignForm::new(None);
    filled(&mut form);
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn create_success_closes_with_created_notice() {
    let mut form = CampaignForm::new(None);
    filled(&mut form);
    form.begin_submit();
    let outcome = form.finish_submit(Ok(existing()));
    assert_eq!(outcome, SubmitOutcome::Saved(Notice::success("Campaign created!")));
    assert!(!form.saving);
}

#[test]
fn edit_success_closes_with_updated_notice() {
    let campaign = existing();
    let mut form = CampaignForm::new(Some(&campaign));
    assert_eq!(form.mode, FormMode::Edit(CampaignId::new("9")));
    assert_eq!(form.draft.title, "Spring Promo");
    form.begin_submit();
    let outcome = form.finish_submit(Ok(campaign));
    assert_eq!(outcome, SubmitOutcome::Saved(Notice::success("Campaign updated!")));
}

#[test]
fn server_field_error_is_shown_under_field_without_notice() {
    let mut form = CampaignForm::new(None);
    filled(&mut form);
    form.begin_submit();
    let err = ApiError::from_status(400, r#"{"budget": ["must be positive"]}"#);
    let outcome = form.finish_submit(Err(err));
    assert_eq!(outcome, SubmitOutcome::Stay(None));
    assert_eq!(form.error(CampaignField::Budget), Some("must be positive"));
    assert!(!form.saving);
}

#[test]
fn generic_failure_notifies_and_stays_open() {
    let mut form = CampaignForm::new(None);
    filled(&mut form);
    form.begin_submit();
    let outcome = form.finish_submit(Err(ApiError::Network("offline".into())));
    assert_eq!(
        outcome,
        SubmitOutcome::Stay(Some(Notice::error("Something went wrong")))
    );
    assert!(form.errors.is_empty());
}

#[test]
fn unknown_server_keys_become_general_errors() {
    let mut form = CampaignForm::new(None);
    filled(&mut form);
    form.begin_submit();
    let err = ApiError::from_status(
        400,
        r#"{"non_field_errors": ["Duplicate title"], "title": ["Too long"]}"#,
    );
    form.finish_submit(Err(err));
    assert_eq!(form.general_errors(), vec!["Duplicate title"]);
    assert_eq!(form.error(CampaignField::Title), Some("Too long"));
}

// =============================================================
// Closing
// =============================================================

#[test]
fn cannot_close_while_saving() {
    let mut form = CampaignForm::new(None);
    assert!(form.can_close());
    filled(&mut form);
    form.begin_submit();
    assert!(!form.can_close());
    form.finish_submit(Ok(existing()));
    assert!(form.can_close());
}

#[test]
fn failed_save_can_be_dismissed() {
    let mut form = CampaignForm::new(None);
    filled(&mut form);
    form.begin_submit();
    form.finish_submit(Err(ApiError::Network("offline".into())));
    assert!(form.can_close());
}
