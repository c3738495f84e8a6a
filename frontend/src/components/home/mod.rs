use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "hero min-h-screen",
            div { class: "hero-content text-center",
                h1 { class: "text-5xl font-bold", "dzshort" }
            }
        }
    }
}
