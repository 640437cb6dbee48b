//! Form state and its transitions, kept free of Yew so they can be tested.

use common::error::ApiResult;
use common::forms::campaign::{CampaignDraft, CampaignField, FormMode};
use common::forms::{FieldErrors, SubmitFailure};
use common::model::campaign::Campaign;
use common::requests::CampaignPayload;

use crate::components::shared::toast::Notice;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

pub struct CampaignForm {
    pub mode: FormMode,
    pub draft: CampaignDraft,
    /// Messages from local validation or the last failed save.
    pub errors: FieldErrors,
    /// A save request is in flight.
    pub saving: bool,
}

/// What the component does after a save attempt finished.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Close the form and tell the list to refresh.
    Saved(Notice),
    /// Stay open; optionally notify.
    Stay(Option<Notice>),
}

impl CampaignForm {
    pub fn new(campaign: Option<&Campaign>) -> Self {
        Self {
            mode: FormMode::for_campaign(campaign),
            draft: campaign.map(CampaignDraft::from_campaign).unwrap_or_default(),
            errors: FieldErrors::new(),
            saving: false,
        }
    }

    pub fn set(&mut self, field: CampaignField, value: String) {
        self.draft.set(field, value);
    }

    /// Validates the draft and, if it passes, marks the form as saving.
    ///
    /// Returns the payload to send, or `None` when nothing must be sent:
    /// either validation failed (errors are set) or a save is already running.
    pub fn begin_submit(&mut self) -> Option<CampaignPayload> {
        if self.saving {
            return None;
        }
        match self.draft.submit() {
            Ok(payload) => {
                self.errors = FieldErrors::new();
                self.saving = true;
                Some(payload)
            }
            Err(err) => {
                self.errors = err.0;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: ApiResult<Campaign>) -> SubmitOutcome {
        self.saving = false;
        match result {
            Ok(_) => SubmitOutcome::Saved(Notice::success(if self.mode.is_edit() {
                "Campaign updated!"
            } else {
                "Campaign created!"
            })),
            Err(err) => match SubmitFailure::from(&err) {
                SubmitFailure::Fields(fields) => {
                    self.errors = fields;
                    SubmitOutcome::Stay(None)
                }
                SubmitFailure::Generic => {
                    SubmitOutcome::Stay(Some(Notice::error("Something went wrong")))
                }
            },
        }
    }

    /// The form may not be dismissed while a save is in flight.
    pub fn can_close(&self) -> bool {
        !self.saving
    }

    pub fn error(&self, field: CampaignField) -> Option<&str> {
        self.errors.get(field.name())
    }

    /// Backend messages that belong to no input, shown above the fields.
    pub fn general_errors(&self) -> Vec<&str> {
        self.errors
            .others(&CampaignField::NAMES)
            .map(|(_, message)| message)
            .collect()
    }
}
