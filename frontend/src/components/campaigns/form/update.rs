//! Update function for the campaign form.
//!
//! Field edits only touch the draft. `Submit` validates locally and, when the
//! draft is valid, sends exactly one create or update request; `Saved` then
//! either closes the form or keeps it open with the errors applied.

use common::forms::campaign::FormMode;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::campaigns::{create_campaign, update_campaign};

use super::messages::Msg;
use super::state::{CampaignForm, SubmitOutcome};

pub fn update(component: &mut CampaignForm, ctx: &Context<CampaignForm>, msg: Msg) -> bool {
    match msg {
        Msg::Set(field, value) => {
            component.set(field, value);
            true
        }
        Msg::Submit => {
            let Some(payload) = component.begin_submit() else {
                // Either invalid (errors changed) or already saving.
                return true;
            };
            let mode = component.mode.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match &mode {
                    FormMode::Create => create_campaign(&payload).await,
                    FormMode::Edit(id) => update_campaign(id, &payload).await,
                };
                link.send_message(Msg::Saved(result));
            });
            true
        }
        Msg::Saved(result) => {
            if let Err(err) = &result {
                error!(format!("saving campaign failed: {err}"));
            }
            match component.finish_submit(result) {
                SubmitOutcome::Saved(notice) => {
                    log!(notice.message);
                    notice.show();
                    ctx.props().on_close.emit(true);
                }
                SubmitOutcome::Stay(notice) => {
                    if let Some(notice) = notice {
                        notice.show();
                    }
                }
            }
            true
        }
        Msg::Cancel => {
            if !component.can_close() {
                return false;
            }
            ctx.props().on_close.emit(false);
            false
        }
    }
}
