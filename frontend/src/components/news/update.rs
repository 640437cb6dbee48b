//! Update function for the news panel.

use common::search::{COPY_FEEDBACK_MS, DEBOUNCE_MS};
use gloo_console::{error, warn};
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::news::get_news;
use crate::components::shared::clipboard::write_text;
use crate::components::shared::toast::{show_toast, ToastKind};

use super::messages::Msg;
use super::state::NewsInspiration;

pub fn update(component: &mut NewsInspiration, ctx: &Context<NewsInspiration>, msg: Msg) -> bool {
    let link = ctx.link().clone();
    match msg {
        Msg::Input(value) => {
            // Replacing or clearing the handle cancels the previous timer.
            component.debounce = component.search.set_input(value).map(|token| {
                Timeout::new(DEBOUNCE_MS, move || {
                    link.send_message(Msg::DebounceElapsed(token));
                })
            });
            true
        }
        Msg::DebounceElapsed(token) => {
            component.debounce = None;
            if let Some(query) = component.search.debounce_elapsed(token) {
                link.send_message(Msg::Fetch(query));
            }
            false
        }
        Msg::Submit => {
            component.debounce = None;
            if let Some(query) = component.search.submit() {
                link.send_message(Msg::Fetch(query));
            }
            false
        }
        Msg::Choose(suggestion) => {
            component.debounce = None;
            if let Some(query) = component.search.choose(suggestion) {
                link.send_message(Msg::Fetch(query));
            }
            true
        }
        Msg::Fetch(query) => {
            component.begin_fetch();
            spawn_local(async move {
                let result = get_news(&query).await;
                link.send_message(Msg::Fetched { query, result });
            });
            true
        }
        Msg::Fetched { query, result } => {
            if let Err(err) = &result {
                error!(format!("loading news for {query:?} failed: {err}"));
            }
            if component.finish_fetch(&query, result) {
                warn!(format!(
                    "showing results for {query:?} while {:?} is the current query",
                    component.search.query()
                ));
            }
            true
        }
        Msg::Copy(text) => {
            spawn_local(async move {
                match write_text(&text).await {
                    Ok(()) => link.send_message(Msg::Copied(text)),
                    Err(err) => {
                        error!("clipboard write failed", err);
                        show_toast(ToastKind::Error, "Could not copy to clipboard");
                    }
                }
            });
            false
        }
        Msg::Copied(text) => {
            let token = component.copy.copied(text);
            spawn_local(async move {
                TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                link.send_message(Msg::CopyExpired(token));
            });
            true
        }
        Msg::CopyExpired(token) => component.copy.expire(token),
    }
}
