use std::rc::Rc;

use dioxus::prelude::*;
use dzshort::{Location, NavigationError, NavigationOutcome, Navigator, RenderTarget, RouteMatch};

use crate::history::WebHistory;
use crate::route::View;

#[derive(Debug, Clone, PartialEq)]
pub enum Mounted {
    Route { route: RouteMatch, view: View },
    NotFound { full_path: String },
}

/// Renders into the signal read by `RouterView`.
#[derive(Clone, Copy)]
pub struct SignalTarget(Signal<Option<Mounted>>);

impl SignalTarget {
    pub fn new(mounted: Signal<Option<Mounted>>) -> Self {
        Self(mounted)
    }
}

impl RenderTarget<View> for SignalTarget {
    fn mount(&self, route: &RouteMatch, view: View) {
        let mut mounted = self.0;
        mounted.set(Some(Mounted::Route { route: route.clone(), view }));
    }

    fn mount_not_found(&self, full_path: &str) {
        let mut mounted = self.0;
        mounted.set(Some(Mounted::NotFound { full_path: full_path.to_owned() }));
    }
}

pub type AppNavigator = Navigator<View, WebHistory, SignalTarget>;

/// Navigation requests, sent to the navigation coroutine.
#[derive(Debug, Clone)]
pub enum Request {
    Start,
    Push(Location),
    Replace(Location),
    Go(isize),
    Pop(String),
}

impl Request {
    pub async fn run(
        self,
        navigator: Rc<AppNavigator>,
    ) -> Result<NavigationOutcome, NavigationError> {
        match self {
            Self::Start => navigator.start().await,
            Self::Push(to) => navigator.push(to).await,
            Self::Replace(to) => navigator.replace(to).await,
            Self::Go(delta) => navigator.go(delta).await,
            Self::Pop(href) => navigator.pop(&href).await,
        }
    }
}

pub fn use_navigation() -> Coroutine<Request> {
    use_coroutine_handle::<Request>()
}
