use std::rc::Rc;

use dioxus::prelude::*;
use dzshort::Config;
use futures::stream::FuturesUnordered;
use futures::StreamExt;

use super::{ErrorToast, RouterView, Toast};
use crate::history::WebHistory;
use crate::route;
use crate::state::{AppNavigator, Mounted, Request, SignalTarget};

fn build_navigator(mounted: Signal<Option<Mounted>>) -> anyhow::Result<Rc<AppNavigator>> {
    let config = Config::from_base_url(env!("DZSHORT_BASE_URL"));
    tracing::info!("configuration: {:?}", config);
    Ok(Rc::new(AppNavigator::new(
        route::table()?,
        WebHistory::new(),
        SignalTarget::new(mounted),
        config.base(),
    )))
}

#[component]
pub fn App() -> Element {
    let mounted = use_signal(|| None);
    let navigator = use_hook(|| build_navigator(mounted).toast());
    let history = use_hook(|| navigator.as_ref().map(|navigator| navigator.history().clone()));

    // Navigations run side by side so that a newer one can supersede a pending one.
    let navigation = use_coroutine(move |mut requests: UnboundedReceiver<Request>| {
        let navigator = navigator.clone();
        async move {
            let Some(navigator) = navigator else { return };
            let mut inflight = FuturesUnordered::new();
            loop {
                futures::select! {
                    request = requests.next() => match request {
                        Some(request) => inflight.push(request.run(navigator.clone())),
                        None => break,
                    },
                    result = inflight.select_next_some() => {
                        result.toast();
                    }
                }
            }
        }
    });

    let _popstate = use_hook(move || {
        let requests = navigation.tx();
        navigation.send(Request::Start);
        history.map(|history| {
            Rc::new(history.on_pop(move |href| {
                if requests.unbounded_send(Request::Pop(href)).is_err() {
                    tracing::warn!("navigation coroutine has stopped");
                }
            }))
        })
    });

    rsx! {
        main { class: "min-h-screen", RouterView { mounted: mounted } }
        ErrorToast {}
    }
}
