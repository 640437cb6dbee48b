//! Campaign table with filters, summary tiles and the row dialogs.
//!
//! The list never edits its own copy of the data. Every save, delete or
//! status change is followed by a full refetch with the current filters.

use yew::prelude::*;

mod dialogs;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CampaignList;

impl Component for CampaignList {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CampaignList::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Fetch);
        }
    }
}
