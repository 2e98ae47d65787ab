//! # Runtime Settings
//!
//! Resolves where the catalog talks to and where it caches. Precedence is
//! command-line flag, then environment variable, then default.
//!
//! Variables:
//! - `RCAT_API_BASE_URL` (default: `https://restcountries.com`)
//! - `RCAT_CACHE_DIR` (default: unset, no persistence)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use rcat_catalog::{CountryCatalog, FileStore};
use rcat_client::config::DEFAULT_BASE_URL;
use rcat_client::CatalogConfig;

pub const BASE_URL_VAR: &str = "RCAT_API_BASE_URL";
pub const CACHE_DIR_VAR: &str = "RCAT_CACHE_DIR";

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub cache_dir: Option<PathBuf>,
}

impl Settings {
    /// Merge flag values with the process environment.
    pub fn resolve(base_url: Option<String>, cache_dir: Option<PathBuf>) -> Self {
        Self::resolve_with(base_url, cache_dir, |var| std::env::var(var).ok())
    }

    /// Merge flag values with an arbitrary variable lookup.
    pub fn resolve_with(
        base_url: Option<String>,
        cache_dir: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let non_empty = |v: String| if v.trim().is_empty() { None } else { Some(v) };
        Self {
            base_url: base_url
                .or_else(|| lookup(BASE_URL_VAR).and_then(non_empty))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_dir: cache_dir.or_else(|| lookup(CACHE_DIR_VAR).and_then(non_empty).map(PathBuf::from)),
        }
    }

    /// Build a catalog over HTTP, with a file store when a cache dir is set.
    pub fn build_catalog(&self) -> Result<CountryCatalog> {
        let config = CatalogConfig::with_base_url(&self.base_url)
            .with_context(|| format!("invalid API base URL: {}", self.base_url))?;
        let catalog = CountryCatalog::over_http(config).context("failed to build HTTP transport")?;
        Ok(match &self.cache_dir {
            Some(dir) => catalog.with_store(Arc::new(FileStore::new(dir))),
            None => catalog,
        })
    }
}

/// Load the catalog: from the cache when `offline`, otherwise from the
/// network, falling back to the cache if the fetch did not install a new
/// snapshot. A successful fetch of an empty list counts as loaded.
pub async fn load(catalog: &CountryCatalog, offline: bool) -> bool {
    if offline {
        return catalog.restore();
    }
    let previous = catalog.snapshot();
    catalog.fetch_all().await;
    let refreshed = match (previous, catalog.snapshot()) {
        (_, None) => false,
        (None, Some(_)) => true,
        (Some(old), Some(new)) => !Arc::ptr_eq(&old, &new),
    };
    if refreshed {
        return true;
    }
    tracing::warn!("live country list unavailable, trying cached copy");
    catalog.restore()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let s = Settings::resolve_with(None, None, env(&[]));
        assert_eq!(s.base_url, "https://restcountries.com");
        assert!(s.cache_dir.is_none());
    }

    #[test]
    fn env_overrides_default() {
        let s = Settings::resolve_with(
            None,
            None,
            env(&[(BASE_URL_VAR, "http://mirror.local"), (CACHE_DIR_VAR, "/tmp/rcat")]),
        );
        assert_eq!(s.base_url, "http://mirror.local");
        assert_eq!(s.cache_dir, Some(PathBuf::from("/tmp/rcat")));
    }

    #[test]
    fn flags_override_env() {
        let s = Settings::resolve_with(
            Some("http://flag.local".into()),
            Some(PathBuf::from("/flag")),
            env(&[(BASE_URL_VAR, "http://mirror.local"), (CACHE_DIR_VAR, "/tmp/rcat")]),
        );
        assert_eq!(s.base_url, "http://flag.local");
        assert_eq!(s.cache_dir, Some(PathBuf::from("/flag")));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let s = Settings::resolve_with(None, None, env(&[(BASE_URL_VAR, "  "), (CACHE_DIR_VAR, "")]));
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert!(s.cache_dir.is_none());
    }

    #[test]
    fn build_catalog_rejects_bad_url() {
        let s = Settings {
            base_url: "not a url".into(),
            cache_dir: None,
        };
        assert!(s.build_catalog().is_err());
    }

    #[tokio::test]
    async fn offline_load_without_cache_fails() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings {
            base_url: "http://127.0.0.1:1".into(),
            cache_dir: Some(dir.path().to_path_buf()),
        };
        let catalog = s.build_catalog().unwrap();
        assert!(!load(&catalog, true).await);
        assert!(!load(&catalog, false).await);
    }
}
