//! `/campaigns/` endpoints.

use common::error::ApiResult;
use common::model::campaign::{decode_list, Campaign, CampaignId};
use common::requests::{CampaignFilters, CampaignPatch, CampaignPayload};
use gloo_console::warn;
use gloo_net::http::Request;
use serde_json::Value;

use super::{build, build_json, read_json, send, url};

fn item_url(id: &CampaignId) -> String {
    url(&format!("/campaigns/{id}/"))
}

/// `GET /campaigns/` with the optional `platform` and `status` filters.
///
/// The body is decoded leniently: a non-array is an empty list.
pub async fn list_campaigns(filters: CampaignFilters) -> ApiResult<Vec<Campaign>> {
    let request = build(Request::get(&url("/campaigns/")).query(filters.query_pairs()))?;
    let body: Value = read_json(send(request).await?).await?;
    let (campaigns, skipped) = decode_list(body);
    if skipped > 0 {
        warn!(format!("skipped {skipped} malformed campaign record(s)"));
    }
    Ok(campaigns)
}

pub async fn get_campaign(id: &CampaignId) -> ApiResult<Campaign> {
    let request = build(Request::get(&item_url(id)))?;
    read_json(send(request).await?).await
}

pub async fn create_campaign(payload: &CampaignPayload) -> ApiResult<Campaign> {
    let request = build_json(Request::post(&url("/campaigns/")), payload)?;
    read_json(send(request).await?).await
}

/// Full replacement (`PUT`).
pub async fn update_campaign(id: &CampaignId, payload: &CampaignPayload) -> ApiResult<Campaign> {
    let request = build_json(Request::put(&item_url(id)), payload)?;
    read_json(send(request).await?).await
}

/// Partial update (`PATCH`) with only the fields set in `patch`.
pub async fn patch_campaign(id: &CampaignId, patch: &CampaignPatch) -> ApiResult<Campaign> {
    let request = build_json(Request::patch(&item_url(id)), patch)?;
    read_json(send(request).await?).await
}

pub async fn delete_campaign(id: &CampaignId) -> ApiResult<()> {
    let request = build(Request::delete(&item_url(id)))?;
    send(request).await.map(|_| ())
}
