mod pattern;
mod table;

use std::borrow::Cow;
use std::fmt;

use concat_string::concat_string;
pub use pattern::{PathPattern, Segment};
pub use table::{Route, RouteDef, RouteTable};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteName(Cow<'static, str>);

impl RouteName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for RouteName {
    fn from(value: &'static str) -> Self {
        Self(value.into())
    }
}

impl From<String> for RouteName {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl PartialEq<str> for RouteName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded values bound by dynamic segments, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(key, _)| *key == name) {
            entry.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::default();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Where a navigation should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A path relative to the base, optionally carrying a query and a hash.
    Path(String),
    /// A route addressed by its name.
    Named { name: RouteName, params: Params },
}

impl Location {
    pub fn named(name: impl Into<RouteName>) -> Self {
        Self::Named { name: name.into(), params: Params::default() }
    }

    /// Binds a parameter of a named location. Path locations are returned unchanged.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Named { params, .. } = &mut self {
            params.insert(name, value);
        }
        self
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::Path(value.to_owned())
    }
}

impl From<String> for Location {
    fn from(value: String) -> Self {
        Self::Path(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub path: String,
    pub params: Params,
    pub query: Vec<(String, String)>,
    pub hash: Option<String>,
    pub full_path: String,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

/// A navigation target split into its components, base already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub path: String,
    pub query: String,
    pub hash: Option<String>,
    pub full_path: String,
}

impl Target {
    pub fn parse(raw: &str) -> Self {
        let (rest, hash) = match raw.split_once('#') {
            Some((rest, hash)) => (rest, Some(hash)),
            None => (raw, None),
        };
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        // Browsers read a leading `//` or `/\` as another origin.
        let path = concat_string!("/", path.trim_start_matches(['/', '\\']));
        let mut full_path = path.clone();
        if !query.is_empty() {
            full_path.push('?');
            full_path.push_str(query);
        }
        if let Some(hash) = hash {
            full_path.push('#');
            full_path.push_str(hash);
        }

        Self { path, query: query.to_owned(), hash: hash.map(str::to_owned), full_path }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.query.as_bytes()).into_owned().collect()
    }
}
