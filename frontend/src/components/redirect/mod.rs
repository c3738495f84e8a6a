use dioxus::prelude::*;

use super::Loading;

#[component]
pub fn Redirect(id: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center mt-10",
            span { class: "text-base-content", "Redirecting {id}" }
            Loading {}
        }
    }
}
