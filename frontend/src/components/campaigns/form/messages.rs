use common::error::ApiResult;
use common::forms::campaign::CampaignField;
use common::model::campaign::Campaign;

pub enum Msg {
    Set(CampaignField, String),
    Submit,
    Saved(ApiResult<Campaign>),
    Cancel,
}
