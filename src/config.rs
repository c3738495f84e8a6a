use derivative::Derivative;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::history::Base;

#[derive(Debug, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "\"/\".into()"))]
    pub base_url: String,
}

impl Config {
    pub const ENV_PREFIX: &'static str = "DZSHORT_";

    /// Reads `DZSHORT_*` variables from the process environment.
    ///
    /// The browser has no process environment. The frontend uses [`Config::from_base_url`] with
    /// the value its build script captured instead.
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::prefixed(Self::ENV_PREFIX))
            .join(Serialized::defaults(Self::default()))
            .extract()
    }

    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base(&self) -> Base {
        Base::new(&self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default_base() {
        Jail::expect_with(|_| {
            let config = Config::new()?;
            assert_eq!(config.base_url, "/");
            assert_eq!(config.base(), Base::default());
            Ok(())
        });
    }

    #[test]
    fn test_base_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("DZSHORT_BASE_URL", "/app/");
            let config = Config::new()?;
            assert_eq!(config.base().href("/42"), "/app/42");
            Ok(())
        });
    }
}
