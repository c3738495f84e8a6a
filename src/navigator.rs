use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::NavigationError;
use crate::history::{Base, History, Traversal};
use crate::route::{Location, RouteMatch, RouteName, RouteTable, Target};

/// Where resolved views end up.
pub trait RenderTarget<V> {
    fn mount(&self, route: &RouteMatch, view: V);

    fn mount_not_found(&self, full_path: &str);
}

impl<V, R: RenderTarget<V> + ?Sized> RenderTarget<V> for Rc<R> {
    fn mount(&self, route: &RouteMatch, view: V) {
        (**self).mount(route, view);
    }

    fn mount_not_found(&self, full_path: &str) {
        (**self).mount_not_found(full_path);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Current {
    Route(RouteMatch),
    NotFound { full_path: String },
}

impl Current {
    pub fn full_path(&self) -> &str {
        match self {
            Self::Route(route) => &route.full_path,
            Self::NotFound { full_path } => full_path,
        }
    }

    pub fn name(&self) -> Option<&RouteName> {
        match self {
            Self::Route(route) => Some(&route.name),
            Self::NotFound { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Committed,
    /// The target is already the current location.
    Duplicated,
    /// A newer navigation started before this one finished loading its view.
    Superseded,
    /// The history settles the traversal later and reports it through [`Navigator::pop`].
    Deferred,
}

#[derive(Debug, Clone, Copy)]
enum Commit {
    Push,
    Replace,
    Pop,
}

/// Binds a route table to a history and a render target.
///
/// Navigations may overlap while views load. Each one takes a ticket when it starts and only the
/// holder of the newest ticket is allowed to touch the history, the render target and the current
/// route. A failed navigation leaves all three as they were. A failed traversal has already moved
/// the history, so its entry is pointed back at the current route.
pub struct Navigator<V, H, R> {
    table: RouteTable<V>,
    base: Base,
    history: H,
    target: R,
    current: RefCell<Option<Current>>,
    ticket: Cell<u64>,
}

impl<V, H, R> Navigator<V, H, R>
where
    V: Clone + 'static,
    H: History,
    R: RenderTarget<V>,
{
    pub fn new(table: RouteTable<V>, history: H, target: R, base: Base) -> Self {
        Self { table, base, history, target, current: RefCell::default(), ticket: Cell::default() }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn current(&self) -> Option<Current> {
        self.current.borrow().clone()
    }

    /// The href a link to this location should carry.
    pub fn href(&self, to: &Location) -> Result<String, NavigationError> {
        Ok(self.base.href(&Target::parse(&self.table.path_for(to)?).full_path))
    }

    /// Renders whatever the history currently shows, without adding an entry.
    pub async fn start(&self) -> Result<NavigationOutcome, NavigationError> {
        let location = self.history.location();
        let path = self.base.strip(&location).to_owned();
        self.navigate(&path, Commit::Replace).await
    }

    pub async fn push(
        &self,
        to: impl Into<Location>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let path = self.table.path_for(&to.into())?;
        self.navigate(&path, Commit::Push).await
    }

    pub async fn replace(
        &self,
        to: impl Into<Location>,
    ) -> Result<NavigationOutcome, NavigationError> {
        let path = self.table.path_for(&to.into())?;
        self.navigate(&path, Commit::Replace).await
    }

    pub async fn go(&self, delta: isize) -> Result<NavigationOutcome, NavigationError> {
        match self.history.go(delta) {
            Traversal::Settled(href) => self.pop(&href).await,
            Traversal::Deferred => Ok(NavigationOutcome::Deferred),
        }
    }

    pub async fn back(&self) -> Result<NavigationOutcome, NavigationError> {
        self.go(-1).await
    }

    pub async fn forward(&self) -> Result<NavigationOutcome, NavigationError> {
        self.go(1).await
    }

    /// Follows a traversal the history already performed.
    pub async fn pop(&self, href: &str) -> Result<NavigationOutcome, NavigationError> {
        let path = self.base.strip(href).to_owned();
        self.navigate(&path, Commit::Pop).await
    }

    async fn navigate(
        &self,
        path: &str,
        commit: Commit,
    ) -> Result<NavigationOutcome, NavigationError> {
        let ticket = self.ticket.get() + 1;
        self.ticket.set(ticket);

        let target = Target::parse(path);
        if self.current.borrow().as_ref().is_some_and(|current| current.full_path() == target.full_path)
        {
            tracing::debug!(path = %target.full_path, "navigation duplicated");
            return Ok(NavigationOutcome::Duplicated);
        }

        let Some((route, matched)) = self.table.lookup(&target) else {
            tracing::warn!(path = %target.full_path, "no route matches");
            self.record(commit, &target.full_path);
            self.target.mount_not_found(&target.full_path);
            *self.current.borrow_mut() = Some(Current::NotFound { full_path: target.full_path });
            return Ok(NavigationOutcome::Committed);
        };
        tracing::debug!(name = %route.name, path = %matched.full_path, "route matched");

        let loaded = route.view.load().await;
        if self.ticket.get() != ticket {
            tracing::debug!(name = %route.name, path = %matched.full_path, "navigation superseded");
            return Ok(NavigationOutcome::Superseded);
        }
        let view = match loaded {
            Ok(view) => view,
            Err(cause) => {
                tracing::error!(name = %route.name, path = %matched.full_path, "{cause:#}");
                if let Commit::Pop = commit {
                    self.restore();
                }
                return Err(NavigationError::ViewLoad { name: route.name.clone(), cause });
            }
        };

        self.record(commit, &matched.full_path);
        self.target.mount(&matched, view);
        tracing::info!(name = %matched.name, path = %matched.full_path, "navigation committed");
        *self.current.borrow_mut() = Some(Current::Route(matched));
        Ok(NavigationOutcome::Committed)
    }

    /// Points the history entry back at the committed location after a traversal failed.
    fn restore(&self) {
        if let Some(current) = self.current.borrow().as_ref() {
            tracing::warn!(path = %current.full_path(), "traversal failed, restoring location");
            self.history.replace(&self.base.href(current.full_path()));
        }
    }

    fn record(&self, commit: Commit, full_path: &str) {
        let href = self.base.href(full_path);
        match commit {
            Commit::Push => self.history.push(&href),
            Commit::Replace => self.history.replace(&href),
            Commit::Pop => {}
        }
    }
}
