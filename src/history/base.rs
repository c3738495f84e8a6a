use concat_string::concat_string;

/// Path prefix every history entry lives under.
///
/// Stored without trailing slash, so the root base `/` is kept as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Base(String);

impl Base {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::default()
        } else if trimmed.starts_with('/') {
            Self(trimmed.to_owned())
        } else {
            Self(concat_string!("/", trimmed))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Prefixes a path that starts with a slash.
    pub fn href(&self, path: &str) -> String {
        concat_string!(self.0, path)
    }

    /// Removes the base from an href. Hrefs outside of the base are returned unchanged.
    pub fn strip<'a>(&self, href: &'a str) -> &'a str {
        if self.0.is_empty() {
            return href;
        }
        match href.strip_prefix(self.0.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with(['/', '?', '#']) => rest,
            _ => href,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("/", "")]
    #[case("", "")]
    #[case("/app/", "/app")]
    #[case("/app", "/app")]
    #[case("app/", "/app")]
    #[case(" /app// ", "/app")]
    fn test_new(#[case] raw: &str, #[case] normalized: &str) {
        assert_eq!(Base::new(raw).as_str(), normalized);
    }

    #[rstest]
    #[case("/", "/app/")]
    #[case("/42", "/app/42")]
    #[case("/42?x=1", "/app/42?x=1")]
    fn test_href(#[case] path: &str, #[case] href: &str) {
        assert_eq!(Base::new("/app/").href(path), href);
    }

    #[rstest]
    #[case("/app/", "/")]
    #[case("/app", "/")]
    #[case("/app/42", "/42")]
    #[case("/app?x=1", "?x=1")]
    #[case("/application", "/application")]
    #[case("/other/42", "/other/42")]
    fn test_strip(#[case] href: &str, #[case] path: &str) {
        assert_eq!(Base::new("/app/").strip(href), path);
    }

    #[test]
    fn test_root_base() {
        let base = Base::new("/");
        assert_eq!(base.href("/42"), "/42");
        assert_eq!(base.strip("/42"), "/42");
    }
}
