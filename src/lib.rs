#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod history;
pub mod navigator;
pub mod route;
pub mod view;

pub use config::Config;
pub use error::{NavigationError, PatternError, TableError};
pub use history::{Base, History, MemoryHistory, Traversal};
pub use navigator::{Current, NavigationOutcome, Navigator, RenderTarget};
pub use route::{Location, Params, RouteDef, RouteMatch, RouteName, RouteTable};
pub use view::LazyView;
