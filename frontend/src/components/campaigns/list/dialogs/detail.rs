//! Read-only campaign details with a quick status switch.

use common::model::campaign::{Campaign, CampaignStatus};
use common::time::format_timestamp;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::campaigns::list::{CampaignList, Msg};
use crate::components::shared::format::{format_currency, platform_icon, status_badge_class};
use crate::components::shared::modal::Modal;

pub fn detail_dialog(campaign: &Campaign, link: &Scope<CampaignList>) -> Html {
    let on_status = {
        let id = campaign.id.clone();
        let current = campaign.status;
        link.batch_callback(move |e: Event| {
            let value = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value())?;
            CampaignStatus::parse(&value)
                .filter(|status| *status != current)
                .map(|status| Msg::ChangeStatus(id.clone(), status))
        })
    };
    let on_edit = {
        let c = campaign.clone();
        link.callback(move |_| Msg::OpenEdit(c.clone()))
    };
    let footer = html! {
        <>
            <button class="btn-secondary" onclick={link.callback(|_| Msg::CloseModal)}>{ "Close" }</button>
            <button class="btn-primary" onclick={on_edit}>{ "✏️ Edit Campaign" }</button>
        </>
    };
    let title = html! {
        <>
            { format!("{} ", platform_icon(campaign.platform)) }
            { campaign.title.clone() }
        </>
    };
    let tags = campaign.tag_list();

    html! {
        <Modal {title} on_close={link.callback(|_| Msg::CloseModal)} {footer} class="modal-wide">
            <div class="detail-grid">
                { detail_item("Platform", html! { { campaign.platform.label() } }) }
                { detail_item("Status", html! {
                    <span class={status_badge_class(campaign.status)}>{ campaign.status.label() }</span>
                }) }
                { detail_item("Budget", html! { { format_currency(campaign.budget_value()) } }) }
                { detail_item("Scheduled", html! { { campaign.scheduled().unwrap_or("Not scheduled").to_string() } }) }
            </div>

            <label class="form-field">
                <span class="form-label">{ "Quick status change" }</span>
                <select class="input" onchange={on_status}>
                    { for CampaignStatus::ALL.iter().map(|s| html! {
                        <option value={s.as_str()} selected={*s == campaign.status}>{ s.label() }</option>
                    }) }
                </select>
            </label>

            { text_section("Target Audience", &campaign.target_audience, false) }
            { text_section("Description", &campaign.description, false) }
            { text_section("Content", &campaign.content, true) }

            if !tags.is_empty() {
                <div class="detail-section">
                    <h4>{ "Tags" }</h4>
                    <div class="tag-list">
                        { for tags.iter().map(|t| html! { <span class="tag">{ format!("#{t}") }</span> }) }
                    </div>
                </div>
            }

            <div class="detail-meta">
                if !campaign.created_at.is_empty() {
                    <span>{ format!("Created {}", format_timestamp(&campaign.created_at)) }</span>
                }
                if let Some(updated) = &campaign.updated_at {
                    <span>{ format!("Updated {}", format_timestamp(updated)) }</span>
                }
            </div>
        </Modal>
    }
}

fn detail_item(label: &'static str, value: Html) -> Html {
    html! {
        <div class="detail-item">
            <div class="detail-label">{ label }</div>
            <div class="detail-value">{ value }</div>
        </div>
    }
}

fn text_section(label: &'static str, text: &str, preformatted: bool) -> Html {
    if text.trim().is_empty() {
        return html! {};
    }
    let class = if preformatted { "detail-text pre" } else { "detail-text" };
    html! {
        <div class="detail-section">
            <h4>{ label }</h4>
            <p {class}>{ text.to_string() }</p>
        </div>
    }
}
