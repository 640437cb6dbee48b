//! Editable draft behind the create/edit campaign form.
//!
//! The draft mirrors every campaign attribute as plain strings or selects.
//! Nothing is checked while typing; `CampaignDraft::submit` validates and
//! turns the draft into the payload that goes over the wire.

use thiserror::Error;

use crate::model::campaign::{Campaign, CampaignId, CampaignStatus, Platform};
use crate::requests::CampaignPayload;

use super::FieldErrors;

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

/// Whether the form creates a new record or replaces an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(CampaignId),
}

impl FormMode {
    pub fn for_campaign(campaign: Option<&Campaign>) -> Self {
        match campaign {
            Some(c) => FormMode::Edit(c.id.clone()),
            None => FormMode::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Inputs of the campaign form, keyed by their wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignField {
    Title,
    Description,
    Platform,
    Status,
    Budget,
    TargetAudience,
    Content,
    ScheduledDate,
    Tags,
}

impl CampaignField {
    pub const ALL: [CampaignField; 9] = [
        CampaignField::Title,
        CampaignField::Description,
        CampaignField::Platform,
        CampaignField::Status,
        CampaignField::Budget,
        CampaignField::TargetAudience,
        CampaignField::Content,
        CampaignField::ScheduledDate,
        CampaignField::Tags,
    ];

    pub const NAMES: [&'static str; 9] = [
        "title",
        "description",
        "platform",
        "status",
        "budget",
        "target_audience",
        "content",
        "scheduled_date",
        "tags",
    ];

    pub fn name(self) -> &'static str {
        match self {
            CampaignField::Title => "title",
            CampaignField::Description => "description",
            CampaignField::Platform => "platform",
            CampaignField::Status => "status",
            CampaignField::Budget => "budget",
            CampaignField::TargetAudience => "target_audience",
            CampaignField::Content => "content",
            CampaignField::ScheduledDate => "scheduled_date",
            CampaignField::Tags => "tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("campaign form has {} invalid field(s)", .0.len())]
pub struct ValidationError(pub FieldErrors);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,
    pub platform: Platform,
    pub status: CampaignStatus,
    pub budget: String,
    pub target_audience: String,
    pub content: String,
    pub scheduled_date: String,
    pub tags: String,
}

impl CampaignDraft {
    /// Draft pre-populated from an existing record, for edit mode.
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            platform: campaign.platform,
            status: campaign.status,
            budget: campaign.budget.clone(),
            target_audience: campaign.target_audience.clone(),
            content: campaign.content.clone(),
            scheduled_date: campaign.scheduled_date.clone().unwrap_or_default(),
            tags: campaign.tags.clone(),
        }
    }

    /// Stores raw input for `field`. Unknown select values are ignored.
    pub fn set(&mut self, field: CampaignField, value: String) {
        match field {
            CampaignField::Title => self.title = value,
            CampaignField::Description => self.description = value,
            CampaignField::Platform => {
                if let Some(p) = Platform::parse(&value) {
                    self.platform = p;
                }
            }
            CampaignField::Status => {
                if let Some(s) = CampaignStatus::parse(&value) {
                    self.status = s;
                }
            }
            CampaignField::Budget => self.budget = value,
            CampaignField::TargetAudience => self.target_audience = value,
            CampaignField::Content => self.content = value,
            CampaignField::ScheduledDate => self.scheduled_date = value,
            CampaignField::Tags => self.tags = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.insert(CampaignField::Title.name(), "Title is required");
        }
        let budget = self.budget.trim();
        if !budget.is_empty() {
            match budget.parse::<f64>() {
                Ok(v) if !v.is_finite() => {
                    errors.insert(CampaignField::Budget.name(), "Must be a number");
                }
                Ok(v) if v < 0.0 => {
                    errors.insert(CampaignField::Budget.name(), "Must be zero or more");
                }
                Ok(_) => {}
                Err(_) => errors.insert(CampaignField::Budget.name(), "Must be a number"),
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(errors))
        }
    }

    /// Validates and builds the request body.
    ///
    /// A blank budget is sent as `"0"` and a blank scheduled date is omitted.
    pub fn submit(&self) -> Result<CampaignPayload, ValidationError> {
        self.validate()?;
        let budget = match self.budget.trim() {
            "" => "0".to_string(),
            b => b.to_string(),
        };
        let scheduled_date = match self.scheduled_date.trim() {
            "" => None,
            d => Some(d.to_string()),
        };
        Ok(CampaignPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            platform: self.platform,
            status: self.status,
            budget,
            target_audience: self.target_audience.clone(),
            content: self.content.clone(),
            scheduled_date,
            tags: self.tags.clone(),
        })
    }
}
