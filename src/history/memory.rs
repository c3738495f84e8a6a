use std::cell::{Cell, RefCell};

use super::{History, Traversal};

/// In-memory history, used outside of the browser.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    position: Cell<usize>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { entries: RefCell::new(vec![initial.into()]), position: Cell::new(0) }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn position(&self) -> usize {
        self.position.get()
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        self.entries.borrow()[self.position.get()].clone()
    }

    fn push(&self, href: &str) {
        let mut entries = self.entries.borrow_mut();
        let position = self.position.get() + 1;
        entries.truncate(position);
        entries.push(href.to_owned());
        self.position.set(position);
    }

    fn replace(&self, href: &str) {
        self.entries.borrow_mut()[self.position.get()] = href.to_owned();
    }

    fn go(&self, delta: isize) -> Traversal {
        let len = self.entries.borrow().len();
        if let Some(position) =
            self.position.get().checked_add_signed(delta).filter(|position| *position < len)
        {
            self.position.set(position);
        }
        Traversal::Settled(self.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncates_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/a");
        history.push("/b");
        assert_eq!(history.go(-2), Traversal::Settled("/".to_owned()));
        history.push("/c");
        assert_eq!(history.entries(), vec!["/", "/c"]);
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_replace() {
        let history = MemoryHistory::new("/");
        history.push("/a");
        history.replace("/b");
        assert_eq!(history.entries(), vec!["/", "/b"]);
        assert_eq!(history.location(), "/b");
    }

    #[test]
    fn test_go_out_of_range_stays() {
        let history = MemoryHistory::new("/");
        history.push("/a");
        assert_eq!(history.go(1), Traversal::Settled("/a".to_owned()));
        assert_eq!(history.go(-5), Traversal::Settled("/a".to_owned()));
        assert_eq!(history.go(-1), Traversal::Settled("/".to_owned()));
        assert_eq!(history.go(1), Traversal::Settled("/a".to_owned()));
    }
}
