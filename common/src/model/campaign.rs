use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::wire::{null_as_empty, string_or_number};

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

/// Opaque backend identifier of a campaign.
///
/// The backend currently emits integers, but the value is only ever echoed
/// back into URLs, so it is kept in its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CampaignId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = string_or_number(deserializer)?;
        if id.trim().is_empty() {
            // Null or blank ids would build `/campaigns//` URLs.
            return Err(serde::de::Error::custom("campaign id is missing"));
        }
        Ok(CampaignId(id))
    }
}

/// Social platform a campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
    Other,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Instagram,
        Platform::Facebook,
        Platform::Twitter,
        Platform::Linkedin,
        Platform::Tiktok,
        Platform::Youtube,
        Platform::Other,
    ];

    /// Wire value, also used as the `platform` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "Linkedin",
            Platform::Tiktok => "Tiktok",
            Platform::Youtube => "Youtube",
            Platform::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Scheduled,
    Active,
    Paused,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 6] = [
        CampaignStatus::Draft,
        CampaignStatus::Scheduled,
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
        CampaignStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Draft => "Draft",
            CampaignStatus::Scheduled => "Scheduled",
            CampaignStatus::Active => "Active",
            CampaignStatus::Paused => "Paused",
            CampaignStatus::Completed => "Completed",
            CampaignStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A campaign record as returned by `/api/campaigns/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub status: CampaignStatus,
    /// Decimal kept as the backend sent it, e.g. `"1500.00"`.
    #[serde(default = "zero_budget", deserialize_with = "string_or_number")]
    pub budget: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub target_audience: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn zero_budget() -> String {
    "0".to_string()
}

impl Campaign {
    /// Numeric budget; anything unparseable counts as zero.
    pub fn budget_value(&self) -> f64 {
        self.budget.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Scheduled date if one is set and non-blank.
    pub fn scheduled(&self) -> Option<&str> {
        self.scheduled_date
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Comma separated tags split into trimmed, non-empty tokens.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// Figures shown above the campaign table.
///
/// Computed from whatever the current filter returned, so they describe the
/// visible subset rather than the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CampaignSummary {
    pub total: usize,
    pub active: usize,
    pub scheduled: usize,
    pub total_budget: f64,
}

impl CampaignSummary {
    pub fn from_campaigns(campaigns: &[Campaign]) -> Self {
        campaigns.iter().fold(Self::default(), |mut acc, c| {
            acc.total += 1;
            match c.status {
                CampaignStatus::Active => acc.active += 1,
                CampaignStatus::Scheduled => acc.scheduled += 1,
                _ => {}
            }
            acc.total_budget += c.budget_value();
            acc
        })
    }
}

/// Decodes a list response without trusting its shape.
///
/// Anything other than a JSON array is an empty list. Elements that do not
/// decode as a campaign are dropped; their count is returned for logging.
pub fn decode_list(body: Value) -> (Vec<Campaign>, usize) {
    let Value::Array(items) = body else {
        return (Vec::new(), 0);
    };
    let total = items.len();
    let campaigns: Vec<Campaign> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    let skipped = total - campaigns.len();
    (campaigns, skipped)
}
