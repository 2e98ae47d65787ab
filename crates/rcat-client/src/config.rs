//! REST Countries endpoint configuration.
//!
//! Defaults point to the public `restcountries.com` v3.1 API. Tests and
//! self-hosted mirrors derive both endpoints from one base URL with
//! [`CatalogConfig::with_base_url`]. Nothing here reads the environment;
//! binaries resolve overrides and pass explicit values in.

use url::Url;

/// Public REST Countries host.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// API version path segment.
const API_PREFIX: &str = "v3.1";

/// Fields requested by the list endpoint. Everything the card and the name
/// index need, nothing more.
pub const LIST_FIELDS: &str = "name,capital,population,region,flags,cca3";

/// Endpoints used by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Full-list endpoint, including the `fields` query.
    /// Default: <https://restcountries.com/v3.1/all?fields=name,capital,population,region,flags,cca3>
    pub all_countries_url: Url,
    /// Prefix of the by-name endpoint; the country name is appended as a
    /// path segment. Default: <https://restcountries.com/v3.1/name>
    pub country_by_name_url: Url,
}

impl CatalogConfig {
    /// Configuration for the public REST Countries API.
    pub fn restcountries() -> Result<Self, ConfigError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Derive both endpoints from a base URL such as `http://127.0.0.1:8080`.
    pub fn with_base_url(base: &str) -> Result<Self, ConfigError> {
        let base = base.trim_end_matches('/');
        Ok(Self {
            all_countries_url: parse_base(&format!("{base}/{API_PREFIX}/all?fields={LIST_FIELDS}"))?,
            country_by_name_url: parse_base(&format!("{base}/{API_PREFIX}/name"))?,
        })
    }

    /// URL of the exact-match detail query for `name`.
    ///
    /// The name is lower-cased and percent-encoded as one path segment.
    /// `fullText=true` restricts the upstream to an exact common-name match;
    /// without it a query like `china` would also return countries whose
    /// names merely contain it.
    pub fn detail_url(&self, name: &str) -> Url {
        let mut url = self.country_by_name_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&name.to_lowercase());
        }
        url.query_pairs_mut().append_pair("fullText", "true");
        url
    }
}

fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            raw.to_string(),
            "URL cannot carry path segments".to_string(),
        ));
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL {0}: {1}")]
    InvalidUrl(String, String),
}
