use super::*;
use common::error::ApiError;
use serde_json::json;

fn campaign(id: u32, status: &str, budget: &str) -> Campaign {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Campaign {id}"),
        "platform": "instagram",
        "status": status,
        "budget": budget
    }))
    .unwrap()
}

fn loaded(campaigns: Vec<Campaign>) -> CampaignList {
    let mut list = CampaignList::new();
    list.begin_fetch();
    list.finish_fetch(Ok(campaigns));
    list
}

// =============================================================
// Fetching and filters
// =============================================================

#[test]
fn starts_loading_and_empty() {
    let list = CampaignList::new();
    assert!(list.loading);
    assert!(list.campaigns.is_empty());
    assert_eq!(list.modal, ListModal::Closed);
}

#[test]
fn both_filters_are_sent_together() {
    let mut list = loaded(vec![]);
    assert!(list.set_platform(platform_filter("instagram")));
    assert!(list.set_status(status_filter("active")));
    let filters = list.begin_fetch();
    assert_eq!(
        filters.query_pairs(),
        vec![("platform", "instagram"), ("status", "active")]
    );
    assert!(list.loading);
}

#[test]
fn unchanged_filter_does_not_refetch() {
    let mut list = loaded(vec![]);
    assert!(!list.set_platform(None));
    assert!(list.set_status(Some(CampaignStatus::Paused)));
    assert!(!list.set_status(status_filter("paused")));
    assert!(list.set_status(status_filter("")));
}

#[test]
fn summary_reflects_returned_subset() {
    let list = loaded(vec![
        campaign(1, "active", "100.00"),
        campaign(2, "active", "25.50"),
    ]);
    let summary = list.summary();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.scheduled, 0);
    assert!((summary.total_budget - 125.5).abs() < 1e-9);
}

#[test]
fn failed_fetch_empties_list_and_notifies() {
    let mut list = loaded(vec![campaign(1, "draft", "0")]);
    list.begin_fetch();
    let notice = list.finish_fetch(Err(ApiError::Network("down".into())));
    assert_eq!(notice, Some(Notice::error("Failed to load campaigns")));
    assert!(list.campaigns.is_empty());
    assert!(!list.loading);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_requires_confirmation_dialog() {
    let mut list = loaded(vec![campaign(1, "draft", "0")]);
    assert_eq!(list.begin_delete(), None);
    list.modal = ListModal::ConfirmDelete(list.campaigns[0].clone());
    assert_eq!(list.begin_delete(), Some(CampaignId::new("1")));
    assert_eq!(list.begin_delete(), None, "second click while in flight");
}

#[test]
fn successful_delete_closes_dialog() {
    let mut list = loaded(vec![campaign(1, "draft", "0")]);
    list.modal = ListModal::ConfirmDelete(list.campaigns[0].clone());
    list.begin_delete();
    let effect = list.finish_delete(Ok(()));
    assert_eq!(effect.notice, Some(Notice::success("Campaign deleted")));
    assert!(effect.refetch);
    assert_eq!(list.modal, ListModal::Closed);
    assert!(!list.deleting);
}

#[test]
fn failed_delete_keeps_item_and_dialog() {
    let mut list = loaded(vec![campaign(1, "draft", "0")]);
    list.modal = ListModal::ConfirmDelete(list.campaigns[0].clone());
    list.begin_delete();
    let err = ApiError::from_status(500, "");
    let effect = list.finish_delete(Err(err));
    assert_eq!(effect.notice, Some(Notice::error("Delete failed")));
    assert!(effect.refetch);
    assert!(matches!(list.modal, ListModal::ConfirmDelete(_)));
    assert_eq!(list.campaigns.len(), 1);
}

// =============================================================
// Dialogs
// =============================================================

#[test]
fn form_close_refetches_only_when_saved() {
    let mut list = loaded(vec![]);
    list.modal = ListModal::Form(None);
    assert_eq!(list.form_closed(false), ListEffect::default());
    assert_eq!(list.modal, ListModal::Closed);
    list.modal = ListModal::Form(None);
    let effect = list.form_closed(true);
    assert!(effect.refetch);
    assert!(effect.notice.is_none());
}

#[test]
fn refreshed_record_replaces_detail_view() {
    let mut list = loaded(vec![campaign(1, "draft", "0")]);
    list.modal = ListModal::View(list.campaigns[0].clone());
    let mut fresh = campaign(1, "active", "0");
    fresh.description = "updated".into();
    assert!(list.view_refreshed(&CampaignId::new("1"), Ok(fresh.clone())));
    assert_eq!(list.modal, ListModal::View(fresh));
}

#[test]
fn stale_or_failed_refresh_is_ignored() {
    let mut list = loaded(vec![campaign(1, "draft", "0"), campaign(2, "draft", "0")]);
    list.modal = ListModal::View(list.campaigns[1].clone());
    assert!(!list.view_refreshed(&CampaignId::new("1"), Ok(campaign(1, "active", "0"))));
    assert!(!list.view_refreshed(
        &CampaignId::new("2"),
        Err(ApiError::Network("down".into()))
    ));
    assert_eq!(list.modal, ListModal::View(list.campaigns[1].clone()));
}

#[test]
fn status_change_updates_open_detail() {
    let mut list = loaded(vec![campaign(3, "draft", "0")]);
    list.modal = ListModal::View(list.campaigns[0].clone());
    let effect = list.status_changed(Ok(campaign(3, "paused", "0")));
    assert_eq!(effect.notice, Some(Notice::success("Status updated")));
    assert!(effect.refetch);
    let ListModal::View(shown) = &list.modal else {
        panic!("detail dialog closed");
    };
    assert_eq!(shown.status, CampaignStatus::Paused);
}

#[test]
fn failed_status_change_still_refetches() {
    let mut list = loaded(vec![campaign(3, "draft", "0")]);
    list.modal = ListModal::View(list.campaigns[0].clone());
    let effect = list.status_changed(Err(ApiError::from_status(400, r#"{"status": ["bad"]}"#)));
    assert_eq!(effect.notice, Some(Notice::error("Status update failed")));
    assert!(effect.refetch);
    assert_eq!(list.modal, ListModal::View(list.campaigns[0].clone()));
}

#[test]
fn delete_refetches_whatever_the_outcome() {
    for result in [Ok(()), Err(ApiError::Network("down".into()))] {
        let mut list = loaded(vec![campaign(1, "draft", "0")]);
        list.modal = ListModal::ConfirmDelete(list.campaigns[0].clone());
        assert!(list.begin_delete().is_some());
        assert!(list.finish_delete(result).refetch);
        assert_eq!(list.campaigns.len(), 1, "table only changes on refetch");
    }
}
