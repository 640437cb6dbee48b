//! News inspiration panel: debounced headline search with copyable titles.
//!
//! The committed query is fetched on mount. Typing reschedules a debounce
//! timer; pressing search or picking a suggestion commits at once. Each
//! committed query is fetched exactly once and responses are applied in
//! arrival order.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::NewsInspiration;

impl Component for NewsInspiration {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NewsInspiration::new()
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
            ctx.link()
                .send_message(Msg::Fetch(self.search.query().to_string()));
        }
    }
}
