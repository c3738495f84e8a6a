use dioxus::prelude::*;
use dzshort::Location;

use crate::route::HOME;
use crate::state::{use_navigation, Request};

#[component]
pub fn NotFound(full_path: String) -> Element {
    let navigation = use_navigation();

    rsx! {
        div { class: "hero min-h-screen",
            div { class: "hero-content text-center flex flex-col",
                h1 { class: "text-3xl font-bold", "Nothing lives at {full_path}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| navigation.send(Request::Push(Location::named(HOME))),
                    "Back home"
                }
            }
        }
    }
}
