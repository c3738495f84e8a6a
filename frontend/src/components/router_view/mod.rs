use dioxus::prelude::*;

use super::{Home, Loading, NotFound, Redirect};
use crate::route::View;
use crate::state::Mounted;

#[component]
pub fn RouterView(mounted: Signal<Option<Mounted>>) -> Element {
    match mounted() {
        Some(Mounted::Route { view: View::Home, .. }) => rsx! {
            Home {}
        },
        Some(Mounted::Route { route, view: View::Redirect }) => rsx! {
            Redirect { id: route.param("id").unwrap_or_default().to_owned() }
        },
        Some(Mounted::NotFound { full_path: path }) => rsx! {
            NotFound { full_path: path }
        },
        None => rsx! {
            Loading {}
        },
    }
}
