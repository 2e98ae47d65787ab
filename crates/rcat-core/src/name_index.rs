//! # Code -> Name Index
//!
//! [`NameIndex`] maps a three-letter [`CountryCode`] to the country's common
//! display name. It is built once from the full country list and used to
//! turn border codes into readable names in the detail view.
//!
//! A record missing `cca3` or `name.common` (or carrying an empty or
//! malformed value in either) contributes no entry. A lookup for a code
//! absent from the source list is a miss, never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::code::CountryCode;
use crate::raw::RawCountry;

/// Lookup table from country code to common display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameIndex {
    names: BTreeMap<CountryCode, String>,
}

impl NameIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from the raw upstream list.
    ///
    /// Keys are unique by code; the last record wins for duplicate codes.
    pub fn build(raw_list: &[Value]) -> Self {
        let mut index = Self::new();
        for value in raw_list {
            let Ok(raw) = RawCountry::from_value(value) else {
                continue;
            };
            let Some(name) = raw.common_name().filter(|n| !n.is_empty()) else {
                continue;
            };
            let Some(code) = raw.cca3.as_deref().and_then(|c| CountryCode::new(c).ok()) else {
                continue;
            };
            index.names.insert(code, name.to_string());
        }
        tracing::debug!(entries = index.len(), "built country name index");
        index
    }

    /// Look up the display name for a code.
    pub fn get(&self, code: &CountryCode) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Resolve a raw border code, passing it through unchanged on a miss.
    pub fn resolve(&self, raw_code: &str) -> String {
        CountryCode::new(raw_code)
            .ok()
            .and_then(|code| self.get(&code))
            .unwrap_or(raw_code)
            .to_string()
    }

    /// Whether the index holds an entry for `code`.
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.names.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CountryCode, &str)> {
        self.names.iter().map(|(code, name)| (code, name.as_str()))
    }
}

impl FromIterator<(CountryCode, String)> for NameIndex {
    fn from_iter<I: IntoIterator<Item = (CountryCode, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
