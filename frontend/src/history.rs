use concat_string::concat_string;
use dzshort::{History, Traversal};
use gloo::events::EventListener;
use gloo::history::{BrowserHistory, History as _};
use gloo::utils::window;

/// Browser history. Traversals settle through the `popstate` listener.
#[derive(Debug, Clone)]
pub struct WebHistory {
    inner: BrowserHistory,
}

fn href(history: &BrowserHistory) -> String {
    let location = history.location();
    concat_string!(location.path(), location.query_str(), location.hash())
}

impl WebHistory {
    pub fn new() -> Self {
        Self { inner: BrowserHistory::new() }
    }

    /// Calls back with the new href whenever the user moves through the browser history.
    pub fn on_pop(&self, callback: impl Fn(String) + 'static) -> EventListener {
        let history = self.inner.clone();
        EventListener::new(&window(), "popstate", move |_| callback(href(&history)))
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for WebHistory {
    fn location(&self) -> String {
        href(&self.inner)
    }

    fn push(&self, href: &str) {
        self.inner.push(href);
    }

    fn replace(&self, href: &str) {
        self.inner.replace(href);
    }

    fn go(&self, delta: isize) -> Traversal {
        self.inner.go(delta);
        Traversal::Deferred
    }
}
