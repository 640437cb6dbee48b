use common::error::ApiResult;
use common::model::campaign::{Campaign, CampaignId, CampaignStatus, CampaignSummary, Platform};
use common::requests::CampaignFilters;

use crate::components::shared::toast::Notice;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Which dialog, if any, is open over the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListModal {
    #[default]
    Closed,
    /// Create (`None`) or edit form.
    Form(Option<Campaign>),
    /// Read-only details.
    View(Campaign),
    ConfirmDelete(Campaign),
}

/// Follow-up work of a state transition, carried out by `update`.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListEffect {
    pub notice: Option<Notice>,
    /// Reload the table with the current filters.
    pub refetch: bool,
}

impl ListEffect {
    fn refetch_with(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            refetch: true,
        }
    }
}

pub struct CampaignList {
    pub campaigns: Vec<Campaign>,
    pub filters: CampaignFilters,
    pub loading: bool,
    pub loaded: bool,
    pub modal: ListModal,
    /// A delete request is in flight.
    pub deleting: bool,
}

impl Default for CampaignList {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignList {
    pub fn new() -> Self {
        Self {
            campaigns: Vec::new(),
            filters: CampaignFilters::default(),
            loading: true,
            loaded: false,
            modal: ListModal::Closed,
            deleting: false,
        }
    }

    /// Returns `true` if the filter changed and the list must be refetched.
    pub fn set_platform(&mut self, platform: Option<Platform>) -> bool {
        if self.filters.platform == platform {
            return false;
        }
        self.filters.platform = platform;
        true
    }

    /// Returns `true` if the filter changed and the list must be refetched.
    pub fn set_status(&mut self, status: Option<CampaignStatus>) -> bool {
        if self.filters.status == status {
            return false;
        }
        self.filters.status = status;
        true
    }

    /// Marks the table as loading and returns the filters to request with.
    pub fn begin_fetch(&mut self) -> CampaignFilters {
        self.loading = true;
        self.filters
    }

    pub fn finish_fetch(&mut self, result: ApiResult<Vec<Campaign>>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(campaigns) => {
                self.campaigns = campaigns;
                None
            }
            Err(_) => {
                self.campaigns.clear();
                Some(Notice::error("Failed to load campaigns"))
            }
        }
    }

    /// Id to delete, if the confirmation dialog is open and idle.
    pub fn begin_delete(&mut self) -> Option<CampaignId> {
        if self.deleting {
            return None;
        }
        let ListModal::ConfirmDelete(campaign) = &self.modal else {
            return None;
        };
        self.deleting = true;
        Some(campaign.id.clone())
    }

    /// Applies the delete outcome; the table is reloaded either way.
    ///
    /// The confirmation closes only when the delete went through.
    pub fn finish_delete(&mut self, result: ApiResult<()>) -> ListEffect {
        self.deleting = false;
        ListEffect::refetch_with(match result {
            Ok(()) => {
                self.modal = ListModal::Closed;
                Notice::success("Campaign deleted")
            }
            Err(_) => Notice::error("Delete failed"),
        })
    }

    /// Closes the form; the table is reloaded only if it saved.
    pub fn form_closed(&mut self, saved: bool) -> ListEffect {
        self.modal = ListModal::Closed;
        ListEffect {
            notice: None,
            refetch: saved,
        }
    }

    /// Replaces the record shown in the detail dialog with a fresher copy.
    ///
    /// Ignored if the dialog was closed or switched to another record in the
    /// meantime. On failure the row's copy stays.
    pub fn view_refreshed(&mut self, id: &CampaignId, result: ApiResult<Campaign>) -> bool {
        match (&mut self.modal, result) {
            (ListModal::View(shown), Ok(fresh)) if shown.id == *id => {
                *shown = fresh;
                true
            }
            _ => false,
        }
    }

    /// Applies a quick status change; the table is reloaded either way.
    pub fn status_changed(&mut self, result: ApiResult<Campaign>) -> ListEffect {
        ListEffect::refetch_with(match result {
            Ok(updated) => {
                if let ListModal::View(shown) = &mut self.modal {
                    if shown.id == updated.id {
                        *shown = updated;
                    }
                }
                Notice::success("Status updated")
            }
            Err(_) => Notice::error("Status update failed"),
        })
    }

    pub fn summary(&self) -> CampaignSummary {
        CampaignSummary::from_campaigns(&self.campaigns)
    }
}

/// Maps a filter `<select>` value to a platform; blank or unknown means all.
pub fn platform_filter(value: &str) -> Option<Platform> {
    Platform::parse(value)
}

/// Maps a filter `<select>` value to a status; blank or unknown means all.
pub fn status_filter(value: &str) -> Option<CampaignStatus> {
    CampaignStatus::parse(value)
}
