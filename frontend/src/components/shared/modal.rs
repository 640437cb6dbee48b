use yew::{html, Callback, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: Html,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub footer: Option<Html>,
    /// Extra class on the panel, e.g. `"modal-wide"`.
    #[prop_or_default]
    pub class: &'static str,
    /// Disables the ✕ button, e.g. while a request is in flight.
    #[prop_or(true)]
    pub closable: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Centered dialog over a dimmed backdrop.
///
/// The parent decides whether it is mounted; closing only emits `on_close`.
pub struct Modal;

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Modal
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());

        html! {
            <div class="modal-backdrop">
                <div class={format!("modal-panel {}", props.class)}>
                    <div class="modal-header">
                        <h2>{ props.title.clone() }</h2>
                        <button class="modal-close" disabled={!props.closable} onclick={on_close}>{ "✕" }</button>
                    </div>
                    <div class="modal-body">
                        { for props.children.iter() }
                    </div>
                    if let Some(footer) = props.footer.clone() {
                        <div class="modal-footer">{ footer }</div>
                    }
                </div>
            </div>
        }
    }
}
