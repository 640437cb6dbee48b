use super::*;
use serde_json::json;

#[test]
fn no_filters_means_no_params() {
    assert!(CampaignFilters::default().query_pairs().is_empty());
}

#[test]
fn both_filters_are_sent_together() {
    let filters = CampaignFilters {
        platform: Some(Platform::Instagram),
        status: Some(CampaignStatus::Active),
    };
    assert_eq!(
        filters.query_pairs(),
        vec![("platform", "instagram"), ("status", "active")]
    );
}

#[test]
fn status_only_filter() {
    let filters = CampaignFilters {
        platform: None,
        status: Some(CampaignStatus::Paused),
    };
    assert_eq!(filters.query_pairs(), vec![("status", "paused")]);
}

#[test]
fn status_patch_serializes_only_status() {
    let body = serde_json::to_value(CampaignPatch::status(CampaignStatus::Completed)).unwrap();
    assert_eq!(body, json!({"status": "completed"}));
}
