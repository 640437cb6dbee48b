use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::dashboard::get_dashboard_stats;

use super::messages::Msg;
use super::state::Dashboard;

pub fn update(component: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Fetch => {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Fetched(get_dashboard_stats().await));
            });
            false
        }
        Msg::Fetched(result) => {
            // Failures only degrade the view; no toast.
            if let Err(err) = &result {
                error!(format!("loading dashboard failed: {err}"));
            }
            component.finish_fetch(result);
            true
        }
    }
}
