//! Transient notifications.
//!
//! A toast is a styled `div` appended to `<body>` that removes itself after
//! `TOAST_MS`. It sits outside the Yew tree so any component, or an async task
//! that outlived one, can report an outcome.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A message a state transition wants shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: &'static str,
}

impl Notice {
    pub fn success(message: &'static str) -> Self {
        Self {
            kind: ToastKind::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: ToastKind::Error,
            message,
        }
    }

    pub fn show(&self) {
        show_toast(self.kind, self.message);
    }
}

/// Displays `message` at the bottom of the screen for a few seconds.
pub fn show_toast(kind: ToastKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    let background = match kind {
        ToastKind::Success => "#15803d",
        ToastKind::Error => "#b91c1c",
    };
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "8px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-size", "14px").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}
