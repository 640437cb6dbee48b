//! Markup of the campaign list: toolbar, summary tiles, table and dialogs.

use common::model::campaign::{Campaign, CampaignStatus, Platform};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::campaigns::form::CampaignForm;
use crate::components::shared::format::{format_currency, platform_icon, status_badge_class};
use crate::components::shared::tile_grid::{stat_tile, TileGrid};

use super::dialogs::{confirm_delete_dialog, detail_dialog};
use super::messages::Msg;
use super::state::{CampaignList, ListModal};

pub fn view(component: &CampaignList, ctx: &Context<CampaignList>) -> Html {
    let link = ctx.link();

    html! {
        <div class="campaign-list">
            { build_toolbar(component, link) }
            { build_summary(component) }
            <div class="card table-card">
                { build_body(component, link) }
            </div>
            { build_modal(component, link) }
        </div>
    }
}

fn select_value(e: Event) -> String {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

fn build_toolbar(component: &CampaignList, link: &Scope<CampaignList>) -> Html {
    let platform = component.filters.platform;
    let status = component.filters.status;

    html! {
        <div class="list-toolbar">
            <div class="filters">
                <select class="input" onchange={link.callback(|e: Event| Msg::SetPlatformFilter(select_value(e)))}>
                    <option value="" selected={platform.is_none()}>{ "All Platforms" }</option>
                    { for Platform::ALL.iter().map(|p| html! {
                        <option value={p.as_str()} selected={platform == Some(*p)}>
                            { format!("{} {}", platform_icon(*p), p.label()) }
                        </option>
                    }) }
                </select>
                <select class="input" onchange={link.callback(|e: Event| Msg::SetStatusFilter(select_value(e)))}>
                    <option value="" selected={status.is_none()}>{ "All Statuses" }</option>
                    { for CampaignStatus::ALL.iter().map(|s| html! {
                        <option value={s.as_str()} selected={status == Some(*s)}>{ s.label() }</option>
                    }) }
                </select>
            </div>
            <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                { "➕ New Campaign" }
            </button>
        </div>
    }
}

fn build_summary(component: &CampaignList) -> Html {
    let summary = component.summary();
    html! {
        <TileGrid columns={4}>
            { stat_tile(None, "Total Campaigns", summary.total.to_string(), "tone-indigo") }
            { stat_tile(None, "Active", summary.active.to_string(), "tone-green") }
            { stat_tile(None, "Scheduled", summary.scheduled.to_string(), "tone-blue") }
            { stat_tile(None, "Total Budget", format_currency(summary.total_budget), "tone-purple") }
        </TileGrid>
    }
}

fn build_body(component: &CampaignList, link: &Scope<CampaignList>) -> Html {
    if component.loading {
        return html! { <div class="loading">{ "Loading campaigns…" }</div> };
    }
    if component.campaigns.is_empty() {
        return html! {
            <div class="empty-state">
                <div class="empty-icon">{ "📭" }</div>
                <p>{ "No campaigns found" }</p>
                <button class="btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                    { "Create your first campaign" }
                </button>
            </div>
        };
    }

    html! {
        <table class="campaign-table">
            <thead>
                <tr>
                    <th>{ "Campaign" }</th>
                    <th>{ "Platform" }</th>
                    <th>{ "Status" }</th>
                    <th>{ "Budget" }</th>
                    <th>{ "Scheduled" }</th>
                    <th class="actions">{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for component.campaigns.iter().map(|c| build_row(c, link)) }
            </tbody>
        </table>
    }
}

fn build_row(campaign: &Campaign, link: &Scope<CampaignList>) -> Html {
    let view = {
        let c = campaign.clone();
        link.callback(move |_| Msg::OpenView(c.clone()))
    };
    let edit = {
        let c = campaign.clone();
        link.callback(move |_| Msg::OpenEdit(c.clone()))
    };
    let delete = {
        let c = campaign.clone();
        link.callback(move |_| Msg::ConfirmDelete(c.clone()))
    };

    html! {
        <tr key={campaign.id.to_string()}>
            <td>
                <div class="row-title">{ campaign.title.clone() }</div>
                if !campaign.target_audience.is_empty() {
                    <div class="row-sub">{ campaign.target_audience.clone() }</div>
                }
            </td>
            <td>{ format!("{} {}", platform_icon(campaign.platform), campaign.platform.label()) }</td>
            <td><span class={status_badge_class(campaign.status)}>{ campaign.status.label() }</span></td>
            <td>{ format_currency(campaign.budget_value()) }</td>
            <td>{ campaign.scheduled().unwrap_or("—").to_string() }</td>
            <td class="actions">
                <button class="btn-icon" title="View" onclick={view}>{ "👁️" }</button>
                <button class="btn-icon" title="Edit" onclick={edit}>{ "✏️" }</button>
                <button class="btn-icon danger" title="Delete" onclick={delete}>{ "🗑️" }</button>
            </td>
        </tr>
    }
}

fn build_modal(component: &CampaignList, link: &Scope<CampaignList>) -> Html {
    match &component.modal {
        ListModal::Closed => html! {},
        ListModal::Form(campaign) => {
            let key = campaign
                .as_ref()
                .map(|c| c.id.to_string())
                .unwrap_or_else(|| "new".to_string());
            html! {
                <CampaignForm
                    key={key}
                    campaign={campaign.clone()}
                    on_close={link.callback(Msg::FormClosed)}
                />
            }
        }
        ListModal::View(campaign) => detail_dialog(campaign, link),
        ListModal::ConfirmDelete(campaign) => {
            confirm_delete_dialog(campaign, component.deleting, link)
        }
    }
}
