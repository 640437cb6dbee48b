//! Update function for the campaign list.
//!
//! Network calls run in `spawn_local` and report back through messages.
//! Mutations (save, delete, status change) always end in `Msg::Fetch`.

use common::requests::CampaignPatch;
use gloo_console::{error, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::campaigns::{delete_campaign, get_campaign, list_campaigns, patch_campaign};

use super::messages::Msg;
use super::state::{platform_filter, status_filter, CampaignList, ListEffect, ListModal};

pub fn update(component: &mut CampaignList, ctx: &Context<CampaignList>, msg: Msg) -> bool {
    let link = ctx.link().clone();
    match msg {
        Msg::Fetch => {
            let filters = component.begin_fetch();
            spawn_local(async move {
                link.send_message(Msg::Fetched(list_campaigns(filters).await));
            });
            true
        }
        Msg::Fetched(result) => {
            if let Err(err) = &result {
                error!(format!("loading campaigns failed: {err}"));
            }
            if let Some(notice) = component.finish_fetch(result) {
                notice.show();
            }
            true
        }
        Msg::SetPlatformFilter(value) => {
            if component.set_platform(platform_filter(&value)) {
                link.send_message(Msg::Fetch);
            }
            false
        }
        Msg::SetStatusFilter(value) => {
            if component.set_status(status_filter(&value)) {
                link.send_message(Msg::Fetch);
            }
            false
        }
        Msg::OpenCreate => {
            component.modal = ListModal::Form(None);
            true
        }
        Msg::OpenEdit(campaign) => {
            component.modal = ListModal::Form(Some(campaign));
            true
        }
        Msg::OpenView(campaign) => {
            let id = campaign.id.clone();
            component.modal = ListModal::View(campaign);
            spawn_local(async move {
                let result = get_campaign(&id).await;
                link.send_message(Msg::ViewRefreshed(id, result));
            });
            true
        }
        Msg::ViewRefreshed(id, result) => {
            if let Err(err) = &result {
                warn!(format!("refreshing campaign {id} failed, showing list copy: {err}"));
            }
            component.view_refreshed(&id, result)
        }
        Msg::ChangeStatus(id, status) => {
            spawn_local(async move {
                let result = patch_campaign(&id, &CampaignPatch::status(status)).await;
                link.send_message(Msg::StatusChanged(result));
            });
            false
        }
        Msg::StatusChanged(result) => {
            if let Err(err) = &result {
                error!(format!("changing campaign status failed: {err}"));
            }
            apply(ctx, component.status_changed(result));
            true
        }
        Msg::ConfirmDelete(campaign) => {
            component.modal = ListModal::ConfirmDelete(campaign);
            true
        }
        Msg::Delete => {
            let Some(id) = component.begin_delete() else {
                return false;
            };
            spawn_local(async move {
                link.send_message(Msg::Deleted(delete_campaign(&id).await));
            });
            true
        }
        Msg::Deleted(result) => {
            if let Err(err) = &result {
                error!(format!("deleting campaign failed: {err}"));
            }
            apply(ctx, component.finish_delete(result));
            true
        }
        Msg::FormClosed(saved) => {
            apply(ctx, component.form_closed(saved));
            true
        }
        Msg::CloseModal => {
            if component.deleting {
                return false;
            }
            component.modal = ListModal::Closed;
            true
        }
    }
}

fn apply(ctx: &Context<CampaignList>, effect: ListEffect) {
    if let Some(notice) = &effect.notice {
        notice.show();
    }
    if effect.refetch {
        ctx.link().send_message(Msg::Fetch);
    }
}
