use common::model::campaign::Campaign;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CampaignFormProps {
    /// Record to edit; `None` opens the form in create mode.
    ///
    /// Read once when the form mounts. Give the form a `key` to reset it for a
    /// different record.
    #[prop_or_default]
    pub campaign: Option<Campaign>,

    /// Called when the form closes; `true` if a campaign was saved.
    pub on_close: Callback<bool>,
}
