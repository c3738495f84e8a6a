use dzshort::{LazyView, RouteDef, RouteTable, TableError};

pub const HOME: &str = "Home";
pub const REDIRECT: &str = "Redirect";

/// Views the route table resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Redirect,
}

pub fn routes() -> Vec<RouteDef<View>> {
    vec![
        RouteDef::new("/", HOME, LazyView::new(|| async { anyhow::Ok(View::Home) })),
        RouteDef::new("/:id", REDIRECT, LazyView::new(|| async { anyhow::Ok(View::Redirect) })),
    ]
}

pub fn table() -> Result<RouteTable<View>, TableError> {
    RouteTable::new(routes())
}
