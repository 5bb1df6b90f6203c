//! Runtime configuration read from the environment.

use std::path::PathBuf;

use greenwave_catalog::FallbackPolicy;
use greenwave_core::CatalogError;
use thiserror::Error;

pub const BIND_ENV: &str = "GREENWAVE_BIND";
pub const ASSET_DIR_ENV: &str = "GREENWAVE_ASSET_DIR";
pub const FALLBACK_ENV: &str = "GREENWAVE_DETAIL_FALLBACK";

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_ASSET_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GREENWAVE_DETAIL_FALLBACK: {0}")]
    Fallback(#[source] CatalogError),

    #[error("{var} is set but empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Listen address, e.g. `0.0.0.0:8080`.
    pub bind: String,
    /// Directory served for `/assets/...` and other root files.
    pub asset_dir: PathBuf,
    /// What `/product/` shows.
    pub fallback: FallbackPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            fallback: FallbackPolicy::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Missing keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = match lookup(BIND_ENV) {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty { var: BIND_ENV }),
            Some(v) => v.trim().to_string(),
            None => {
                tracing::warn!("{BIND_ENV} not set; using {DEFAULT_BIND}");
                DEFAULT_BIND.to_string()
            }
        };

        let asset_dir = match lookup(ASSET_DIR_ENV) {
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigError::Empty { var: ASSET_DIR_ENV });
            }
            Some(v) => PathBuf::from(v.trim()),
            None => {
                tracing::info!("{ASSET_DIR_ENV} not set; serving assets from ./{DEFAULT_ASSET_DIR}");
                PathBuf::from(DEFAULT_ASSET_DIR)
            }
        };

        let fallback = match lookup(FALLBACK_ENV) {
            Some(v) => FallbackPolicy::from_setting(&v).map_err(ConfigError::Fallback)?,
            None => FallbackPolicy::default(),
        };

        Ok(Self {
            bind,
            asset_dir,
            fallback,
        })
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use greenwave_core::ProductId;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.asset_dir, PathBuf::from("public"));
    }

    #[test]
    fn reads_every_variable() {
        let config = SiteConfig::from_lookup(lookup(&[
            (BIND_ENV, "127.0.0.1:3000"),
            (ASSET_DIR_ENV, "/srv/greenwave"),
            (FALLBACK_ENV, "pet-film-eco"),
        ]))
        .unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000");
        assert_eq!(config.asset_dir, PathBuf::from("/srv/greenwave"));
        assert_eq!(
            config.fallback,
            FallbackPolicy::DefaultProduct(ProductId::from_static("pet-film-eco"))
        );
    }

    #[test]
    fn none_disables_the_fallback() {
        let config = SiteConfig::from_lookup(lookup(&[(FALLBACK_ENV, "none")])).unwrap();
        assert_eq!(config.fallback, FallbackPolicy::NotFound);
    }

    #[test]
    fn rejects_bad_values() {
        let err = SiteConfig::from_lookup(lookup(&[(FALLBACK_ENV, "Not A Slug")])).unwrap_err();
        assert!(matches!(err, ConfigError::Fallback(CatalogError::InvalidId(_))));

        let err = SiteConfig::from_lookup(lookup(&[(BIND_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { var: BIND_ENV }));
    }
}
