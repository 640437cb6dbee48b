//! Markup of the campaign form modal.

use common::forms::campaign::CampaignField;
use common::model::campaign::{CampaignStatus, Platform};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::shared::modal::Modal;

use super::messages::Msg;
use super::state::CampaignForm;

pub fn view(component: &CampaignForm, ctx: &Context<CampaignForm>) -> Html {
    let link = ctx.link();
    let editing = component.mode.is_edit();
    let title = if editing {
        "✏️ Edit Campaign"
    } else {
        "✨ New Campaign"
    };
    let submit_label = if component.saving {
        "⏳ Saving…"
    } else if editing {
        "✅ Save Changes"
    } else {
        "🚀 Create Campaign"
    };
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let draft = &component.draft;
    let general = component.general_errors();

    html! {
        <Modal title={html! { { title } }} on_close={link.callback(|_| Msg::Cancel)}
            closable={component.can_close()}
            class="modal-wide"
        >
            <form class="campaign-form" onsubmit={on_submit}>
                if !general.is_empty() {
                    <div class="form-error-box">
                        { for general.iter().map(|m| html! { <p>{ *m }</p> }) }
                    </div>
                }
                { text_input(component, link, CampaignField::Title, "Title *", "text", &draft.title, "Summer Sale Launch") }
                <div class="form-row">
                    { select_input(component, link, CampaignField::Platform, "Platform",
                        Platform::ALL.iter().map(|p| (p.as_str(), p.label())).collect(), draft.platform.as_str()) }
                    { select_input(component, link, CampaignField::Status, "Status",
                        CampaignStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect(), draft.status.as_str()) }
                </div>
                <div class="form-row">
                    { text_input(component, link, CampaignField::Budget, "Budget ($)", "number", &draft.budget, "0.00") }
                    { text_input(component, link, CampaignField::ScheduledDate, "Scheduled Date", "date", &draft.scheduled_date, "") }
                </div>
                { text_input(component, link, CampaignField::TargetAudience, "Target Audience", "text", &draft.target_audience, "e.g. Women 25-34 interested in fitness") }
                { text_area(component, link, CampaignField::Description, "Description", &draft.description, 3) }
                { text_area(component, link, CampaignField::Content, "Content", &draft.content, 4) }
                { text_input(component, link, CampaignField::Tags, "Tags", "text", &draft.tags, "summer, sale, fashion") }
                <div class="form-actions">
                    <button
                        type="button"
                        class="btn-secondary"
                        disabled={!component.can_close()}
                        onclick={link.callback(|_| Msg::Cancel)}
                    >
                        { "Cancel" }
                    </button>
                    <button type="submit" class="btn-primary" disabled={component.saving}>
                        { submit_label }
                    </button>
                </div>
            </form>
        </Modal>
    }
}

fn field_error(component: &CampaignForm, field: CampaignField) -> Html {
    match component.error(field) {
        Some(message) => html! { <p class="field-error">{ message.to_string() }</p> },
        None => html! {},
    }
}

fn field_class(component: &CampaignForm, field: CampaignField) -> Classes {
    classes!("input", component.error(field).map(|_| "input-error"))
}

fn text_input(
    component: &CampaignForm,
    link: &Scope<CampaignForm>,
    field: CampaignField,
    label: &'static str,
    kind: &'static str,
    value: &str,
    placeholder: &'static str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::Set(field, input.value())
    });
    html! {
        <label class="form-field">
            <span class="form-label">{ label }</span>
            <input
                class={field_class(component, field)}
                type={kind}
                name={field.name()}
                value={value.to_string()}
                step={(kind == "number").then_some("0.01")}
                {placeholder}
                {oninput}
            />
            { field_error(component, field) }
        </label>
    }
}

fn text_area(
    component: &CampaignForm,
    link: &Scope<CampaignForm>,
    field: CampaignField,
    label: &'static str,
    value: &str,
    rows: u32,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::Set(field, input.value())
    });
    html! {
        <label class="form-field">
            <span class="form-label">{ label }</span>
            <textarea
                class={field_class(component, field)}
                name={field.name()}
                rows={rows.to_string()}
                value={value.to_string()}
                {oninput}
            />
            { field_error(component, field) }
        </label>
    }
}

fn select_input(
    component: &CampaignForm,
    link: &Scope<CampaignForm>,
    field: CampaignField,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    selected: &str,
) -> Html {
    let onchange = link.callback(move |e: Event| {
        let value = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default();
        Msg::Set(field, value)
    });
    html! {
        <label class="form-field">
            <span class="form-label">{ label }</span>
            <select class={field_class(component, field)} name={field.name()} {onchange}>
                { for options.into_iter().map(|(value, text)| html! {
                    <option {value} selected={value == selected}>{ text }</option>
                }) }
            </select>
            { field_error(component, field) }
        </label>
    }
}
