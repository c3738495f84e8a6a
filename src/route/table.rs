use std::borrow::Cow;

use derivative::Derivative;
use itertools::Itertools;

use super::{Location, PathPattern, RouteMatch, RouteName, Target};
use crate::error::{NavigationError, TableError};
use crate::view::LazyView;

/// A declarative binding of a path pattern to a name and a lazily loaded view.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct RouteDef<V> {
    pub path: Cow<'static, str>,
    pub name: RouteName,
    #[derivative(Debug = "ignore")]
    pub component: LazyView<V>,
}

impl<V> RouteDef<V> {
    pub fn new(
        path: impl Into<Cow<'static, str>>,
        name: impl Into<RouteName>,
        component: LazyView<V>,
    ) -> Self {
        Self { path: path.into(), name: name.into(), component }
    }
}

#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct Route<V> {
    pub name: RouteName,
    pub pattern: PathPattern,
    #[derivative(Debug = "ignore")]
    pub view: LazyView<V>,
}

/// Ordered, immutable list of routes. The first route whose pattern matches wins.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    pub fn new(defs: Vec<RouteDef<V>>) -> Result<Self, TableError> {
        if defs.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(name) = defs.iter().map(|def| &def.name).duplicates().next() {
            return Err(TableError::DuplicateName(name.clone()));
        }

        let routes = defs
            .into_iter()
            .map(|RouteDef { path, name, component }| {
                Ok(Route { name, pattern: PathPattern::parse(&path)?, view: component })
            })
            .collect::<Result<Vec<_>, TableError>>()?;

        for (index, route) in routes.iter().enumerate().filter(|(_, r)| r.pattern.is_static()) {
            if let Some(by) =
                routes[..index].iter().find(|earlier| earlier.pattern.matches(route.pattern.as_str()).is_some())
            {
                return Err(TableError::ShadowedRoute {
                    shadowed: route.name.clone(),
                    by: by.name.clone(),
                });
            }
        }

        tracing::debug!(
            routes = %routes.iter().map(|route| route.pattern.as_str()).join(", "),
            "route table built"
        );
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn get(&self, name: &RouteName) -> Option<&Route<V>> {
        self.routes.iter().find(|route| &route.name == name)
    }

    /// Resolves a path relative to the base, query and hash included.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.lookup(&Target::parse(path)).map(|(_, matched)| matched)
    }

    pub(crate) fn lookup(&self, target: &Target) -> Option<(&Route<V>, RouteMatch)> {
        self.routes.iter().find_map(|route| {
            route.pattern.matches(&target.path).map(|params| {
                (
                    route,
                    RouteMatch {
                        name: route.name.clone(),
                        path: target.path.clone(),
                        params,
                        query: target.query_pairs(),
                        hash: target.hash.clone(),
                        full_path: target.full_path.clone(),
                    },
                )
            })
        })
    }

    /// The path, relative to the base, a location points to.
    pub fn path_for(&self, location: &Location) -> Result<String, NavigationError> {
        match location {
            Location::Path(path) => Ok(path.clone()),
            Location::Named { name, params } => self
                .get(name)
                .ok_or_else(|| NavigationError::UnknownRoute(name.clone()))?
                .pattern
                .build(name, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::error::PatternError;

    fn def(path: &'static str, name: &'static str) -> RouteDef<&'static str> {
        RouteDef::new(path, name, LazyView::ready(name))
    }

    fn table() -> RouteTable<&'static str> {
        RouteTable::new(vec![def("/", "Home"), def("/:id", "Redirect")]).unwrap()
    }

    #[rstest]
    #[case("/")]
    #[case("//")]
    #[case("///")]
    fn test_resolve_home(#[case] path: &str) {
        let matched = table().resolve(path).unwrap();
        assert_eq!(matched.name, "Home");
        assert_eq!(matched.full_path, "/");
        assert!(matched.params.is_empty());
    }

    #[rstest]
    #[case("/abc123", "abc123")]
    #[case("/42/", "42")]
    #[case("abc123", "abc123")]
    #[case("/abc123?utm=x#top", "abc123")]
    #[case("//evil.com", "evil.com")]
    fn test_resolve_redirect(#[case] path: &str, #[case] id: &str) {
        let matched = table().resolve(path).unwrap();
        assert_eq!(matched.name, "Redirect");
        assert_eq!(matched.param("id"), Some(id));
    }

    #[test]
    fn test_resolve_keeps_query_and_hash() {
        let matched = table().resolve("/abc123?utm=x#top").unwrap();
        assert_eq!(matched.path, "/abc123");
        assert_eq!(matched.query, vec![("utm".to_owned(), "x".to_owned())]);
        assert_eq!(matched.hash.as_deref(), Some("top"));
        assert_eq!(matched.full_path, "/abc123?utm=x#top");
    }

    #[rstest]
    #[case("/a/b")]
    #[case("/a/b/c")]
    #[case("/a//b")]
    fn test_resolve_unmatched(#[case] path: &str) {
        assert_eq!(table().resolve(path), None);
    }

    #[test]
    fn test_root_resolves_home_regardless_of_order() {
        let table = RouteTable::new(vec![def("/:id", "Redirect"), def("/", "Home")]).unwrap();
        assert_eq!(table.resolve("/").unwrap().name, "Home");
        assert_eq!(table.resolve("/abc").unwrap().name, "Redirect");
    }

    #[test]
    fn test_reject_duplicate_name() {
        assert_eq!(
            RouteTable::new(vec![def("/", "Home"), def("/:id", "Home")]).unwrap_err(),
            TableError::DuplicateName("Home".into())
        );
    }

    #[test]
    fn test_reject_shadowed_static_route() {
        assert_eq!(
            RouteTable::new(vec![def("/:id", "Redirect"), def("/about", "About")]).unwrap_err(),
            TableError::ShadowedRoute { shadowed: "About".into(), by: "Redirect".into() }
        );
        assert!(RouteTable::new(vec![def("/about", "About"), def("/:id", "Redirect")]).is_ok());
    }

    #[test]
    fn test_reject_invalid_pattern() {
        assert_eq!(
            RouteTable::new(vec![def("home", "Home")]).unwrap_err(),
            TableError::InvalidPattern(PatternError::MissingLeadingSlash("home".to_owned()))
        );
    }

    #[test]
    fn test_reject_empty() {
        assert_eq!(RouteTable::<()>::new(vec![]).unwrap_err(), TableError::Empty);
    }

    #[test]
    fn test_path_for() {
        let table = table();
        assert_eq!(table.path_for(&Location::named("Home")).unwrap(), "/");
        assert_eq!(
            table.path_for(&Location::named("Redirect").param("id", "abc")).unwrap(),
            "/abc"
        );
        assert_eq!(table.path_for(&"/raw?x=1".into()).unwrap(), "/raw?x=1");
        assert!(matches!(
            table.path_for(&Location::named("Missing")),
            Err(NavigationError::UnknownRoute(_))
        ));
    }
}
