//! Create/edit campaign modal.
//!
//! The mode follows the `campaign` prop: none means create, a record means
//! edit. Validation runs only on submit; a valid draft is sent once, and the
//! outcome either closes the form with `on_close(true)` or keeps it open with
//! field messages or a toast.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CampaignFormProps;
pub use state::CampaignForm;

impl Component for CampaignForm {
    type Message = Msg;
    type Properties = CampaignFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        CampaignForm::new(ctx.props().campaign.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
