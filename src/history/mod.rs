mod base;
mod memory;

use std::rc::Rc;

pub use base::Base;
pub use memory::MemoryHistory;

/// Result of asking a history to move through its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Traversal {
    /// The history moved synchronously and now shows this href.
    Settled(String),
    /// The history will report the new href later, through its pop notification.
    Deferred,
}

/// Navigation entries of the host, addressed by full href (base included).
pub trait History {
    fn location(&self) -> String;

    fn push(&self, href: &str);

    fn replace(&self, href: &str);

    fn go(&self, delta: isize) -> Traversal;
}

impl<H: History + ?Sized> History for Rc<H> {
    fn location(&self) -> String {
        (**self).location()
    }

    fn push(&self, href: &str) {
        (**self).push(href);
    }

    fn replace(&self, href: &str) {
        (**self).replace(href);
    }

    fn go(&self, delta: isize) -> Traversal {
        (**self).go(delta)
    }
}
