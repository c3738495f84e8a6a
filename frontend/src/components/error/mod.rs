use std::borrow::Cow;
use std::fmt::Display;

use dioxus::prelude::*;

static ERROR_SIGNAL: GlobalSignal<Option<Cow<'static, str>>> = Signal::global(Default::default);

struct ToastMessage;

impl ToastMessage {
    fn write<E: Into<Cow<'static, str>>>(e: E) {
        *ERROR_SIGNAL.write() = Some(e.into());
    }

    fn clear() {
        *ERROR_SIGNAL.write() = None;
    }
}

pub trait Toast {
    type Out;

    fn toast(self) -> Option<Self::Out>;
}

impl<T, E: Display> Toast for Result<T, E> {
    type Out = T;

    fn toast(self) -> Option<Self::Out> {
        match self {
            Ok(t) => {
                ToastMessage::clear();
                Some(t)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::error!("{message}");
                ToastMessage::write(message);
                None
            }
        }
    }
}

#[component]
pub fn ErrorToast() -> Element {
    rsx! {
        if let Some(e) = ERROR_SIGNAL.read().as_ref() {
            div { class: "toast",
                div {
                    class: "alert alert-error",
                    onclick: |_| ToastMessage::clear(),
                    span { class: "text-error-content", "{e}" }
                }
            }
        }
    }
}
