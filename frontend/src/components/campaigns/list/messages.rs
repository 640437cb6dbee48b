use common::error::ApiResult;
use common::model::campaign::{Campaign, CampaignId, CampaignStatus};

pub enum Msg {
    Fetch,
    Fetched(ApiResult<Vec<Campaign>>),
    /// Raw `<select>` value; empty means all platforms.
    SetPlatformFilter(String),
    /// Raw `<select>` value; empty means all statuses.
    SetStatusFilter(String),
    OpenCreate,
    OpenEdit(Campaign),
    OpenView(Campaign),
    ViewRefreshed(CampaignId, ApiResult<Campaign>),
    ChangeStatus(CampaignId, CampaignStatus),
    StatusChanged(ApiResult<Campaign>),
    ConfirmDelete(Campaign),
    Delete,
    Deleted(ApiResult<()>),
    /// The form closed; `true` if it saved.
    FormClosed(bool),
    CloseModal,
}
