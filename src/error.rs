use std::sync::Arc;

use crate::route::RouteName;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Pattern {0:?} should start with a slash")]
    MissingLeadingSlash(String),
    #[error("Pattern {0:?} contains a parameter without name")]
    EmptyParamName(String),
    #[error("Pattern {pattern:?} declares parameter {param:?} more than once")]
    DuplicateParam { pattern: String, param: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Route table should contain at least one route")]
    Empty,
    #[error("Route name {0} is declared more than once")]
    DuplicateName(RouteName),
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
    #[error("Route {shadowed} is unreachable because route {by} is declared before it")]
    ShadowedRoute { shadowed: RouteName, by: RouteName },
}

#[derive(Debug, thiserror::Error, Clone)]
pub enum NavigationError {
    #[error("Route {0} does not exist")]
    UnknownRoute(RouteName),
    #[error("Route {name} requires parameter {param:?}")]
    MissingParam { name: RouteName, param: String },
    #[error("Parameter {param:?} of route {name} should not be empty")]
    EmptyParam { name: RouteName, param: String },
    #[error("Could not load view of route {name}: {cause:#}")]
    ViewLoad { name: RouteName, cause: Arc<anyhow::Error> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_load_message() {
        let error = NavigationError::ViewLoad {
            name: "Redirect".into(),
            cause: Arc::new(anyhow::anyhow!("network is unreachable")),
        };
        assert_eq!(
            error.to_string(),
            "Could not load view of route Redirect: network is unreachable"
        );
    }
}
