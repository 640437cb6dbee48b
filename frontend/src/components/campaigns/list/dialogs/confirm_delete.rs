use common::model::campaign::Campaign;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::campaigns::list::{CampaignList, Msg};
use crate::components::shared::modal::Modal;

pub fn confirm_delete_dialog(
    campaign: &Campaign,
    deleting: bool,
    link: &Scope<CampaignList>,
) -> Html {
    let footer = html! {
        <>
            <button class="btn-secondary" disabled={deleting} onclick={link.callback(|_| Msg::CloseModal)}>
                { "Cancel" }
            </button>
            <button class="btn-danger" disabled={deleting} onclick={link.callback(|_| Msg::Delete)}>
                { if deleting { "Deleting…" } else { "Delete" } }
            </button>
        </>
    };

    html! {
        <Modal title={html! { "🗑️ Delete Campaign" }} on_close={link.callback(|_| Msg::CloseModal)}
            closable={!deleting}
            {footer}
        >
            <p>
                { "Are you sure you want to delete " }
                <strong>{ campaign.title.clone() }</strong>
                { "? This cannot be undone." }
            </p>
        </Modal>
    }
}
