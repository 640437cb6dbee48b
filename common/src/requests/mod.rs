//! Bodies and query parameters sent to the campaign backend.

use serde::Serialize;

use crate::model::campaign::{CampaignStatus, Platform};

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

/// Body of `POST /campaigns/` and `PUT /campaigns/{id}/`.
///
/// Built from a validated form draft. `budget` is never blank and
/// `scheduled_date` is left out of the JSON entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPayload {
    pub title: String,
    pub description: String,
    pub platform: Platform,
    pub status: CampaignStatus,
    pub budget: String,
    pub target_audience: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    pub tags: String,
}

/// Body of `PATCH /campaigns/{id}/`: the quick status change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignPatch {
    pub status: CampaignStatus,
}

impl CampaignPatch {
    pub fn status(status: CampaignStatus) -> Self {
        Self { status }
    }
}

/// Optional filters of `GET /campaigns/`. `None` means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CampaignFilters {
    pub platform: Option<Platform>,
    pub status: Option<CampaignStatus>,
}

impl CampaignFilters {
    /// Query parameters for the list request; unset filters are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(platform) = self.platform {
            pairs.push(("platform", platform.as_str()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str()));
        }
        pairs
    }
}
