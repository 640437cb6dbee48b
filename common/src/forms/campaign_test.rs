use super::*;
use serde_json::json;

fn valid_draft() -> CampaignDraft {
    CampaignDraft {
        title: "Summer Sale".into(),
        budget: "250.00".into(),
        scheduled_date: "2025-07-01".into(),
        ..CampaignDraft::default()
    }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_title_marks_only_title() {
    let draft = CampaignDraft {
        title: "   ".into(),
        ..CampaignDraft::default()
    };
    let ValidationError(errors) = draft.submit().unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title"]);
    assert_eq!(errors.get("title"), Some("Title is required"));
}

#[test]
fn non_numeric_budget_is_rejected() {
    let draft = CampaignDraft {
        budget: "lots".into(),
        ..valid_draft()
    };
    let ValidationError(errors) = draft.validate().unwrap_err();
    assert_eq!(errors.get("budget"), Some("Must be a number"));
    assert!(errors.get("title").is_none());
}

#[test]
fn negative_budget_is_rejected() {
    let draft = CampaignDraft {
        budget: "-5".into(),
        ..valid_draft()
    };
    let ValidationError(errors) = draft.validate().unwrap_err();
    assert_eq!(errors.get("budget"), Some("Must be zero or more"));
}

#[test]
fn both_errors_are_reported_together() {
    let draft = CampaignDraft {
        title: String::new(),
        budget: "abc".into(),
        ..CampaignDraft::default()
    };
    let ValidationError(errors) = draft.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn validation_error_message_counts_fields() {
    let err = CampaignDraft::default().validate().unwrap_err();
    assert_eq!(err.to_string(), "campaign form has 1 invalid field(s)");
}

// =============================================================
// Payload
// =============================================================

#[test]
fn blank_budget_is_sent_as_zero() {
    for blank in ["", "  "] {
        let draft = CampaignDraft {
            budget: blank.into(),
            ..valid_draft()
        };
        assert_eq!(draft.submit().unwrap().budget, "0");
    }
}

#[test]
fn blank_scheduled_date_is_absent_from_body() {
    let draft = CampaignDraft {
        scheduled_date: String::new(),
        ..valid_draft()
    };
    let body = serde_json::to_value(draft.submit().unwrap()).unwrap();
    assert!(body.get("scheduled_date").is_none());
}

#[test]
fn payload_copies_every_field() {
    let draft = CampaignDraft {
        title: "Launch".into(),
        description: "Overview".into(),
        platform: Platform::Linkedin,
        status: CampaignStatus::Scheduled,
        budget: "99.5".into(),
        target_audience: "B2B".into(),
        content: "Copy".into(),
        scheduled_date: "2025-09-01".into(),
        tags: "b2b, launch".into(),
    };
    let body = serde_json::to_value(draft.submit().unwrap()).unwrap();
    assert_eq!(
        body,
        json!({
            "title": "Launch",
            "description": "Overview",
            "platform": "linkedin",
            "status": "scheduled",
            "budget": "99.5",
            "target_audience": "B2B",
            "content": "Copy",
            "scheduled_date": "2025-09-01",
            "tags": "b2b, launch"
        })
    );
}

// =============================================================
// Draft editing
// =============================================================

#[test]
fn edit_mode_prefills_from_campaign() {
    let campaign: Campaign = serde_json::from_value(json!({
        "id": 4,
        "title": "Existing",
        "platform": "youtube",
        "status": "active",
        "budget": "10.00",
        "scheduled_date": null
    }))
    .unwrap();
    let draft = CampaignDraft::from_campaign(&campaign);
    assert_eq!(draft.title, "Existing");
    assert_eq!(draft.platform, Platform::Youtube);
    assert_eq!(draft.budget, "10.00");
    assert_eq!(draft.scheduled_date, "");
    assert_eq!(
        FormMode::for_campaign(Some(&campaign)),
        FormMode::Edit(CampaignId::new("4"))
    );
    assert_eq!(FormMode::for_campaign(None), FormMode::Create);
}

#[test]
fn set_ignores_unknown_select_values() {
    let mut draft = CampaignDraft::default();
    draft.set(CampaignField::Platform, "myspace".into());
    assert_eq!(draft.platform, Platform::Instagram);
    draft.set(CampaignField::Platform, "tiktok".into());
    assert_eq!(draft.platform, Platform::Tiktok);
    draft.set(CampaignField::Status, "paused".into());
    assert_eq!(draft.status, CampaignStatus::Paused);
    draft.set(CampaignField::Tags, "a,b".into());
    assert_eq!(draft.tags, "a,b");
}

#[test]
fn field_names_match_wire_keys() {
    let names: Vec<_> = CampaignField::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, CampaignField::NAMES);
}
