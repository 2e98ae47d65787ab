//! # Card Projection
//!
//! Maps raw upstream records to [`Card`] summary view-models for the list
//! view. The projection never drops a record: malformed entries degrade to a
//! card built from defaults, so `to_cards(list).len() == list.len()` always.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::raw::RawCountry;

/// Lightweight per-country summary used for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub name: String,
    pub capital: String,
    pub population: u64,
    pub region: String,
    pub flag_url: String,
    pub flag_alt: String,
}

impl Card {
    /// Build a card from a normalized record, applying field defaults.
    pub fn from_raw(raw: &RawCountry) -> Self {
        Self {
            name: raw.name_or_default(),
            capital: raw.capital_or_default(),
            population: raw.population_or_default(),
            region: raw.region_or_default(),
            flag_url: raw.flag_url_or_default(),
            flag_alt: raw.flag_alt_or_default(),
        }
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::from_raw(&RawCountry::default())
    }
}

/// Project one raw value into a card.
pub fn to_card(value: &Value) -> Card {
    match RawCountry::from_value(value) {
        Ok(raw) => Card::from_raw(&raw),
        Err(e) => {
            tracing::warn!(error = %e, "malformed country record, using default card");
            Card::default()
        }
    }
}

/// Project a raw list into cards, preserving input order and length.
pub fn to_cards(raw_list: &[Value]) -> Vec<Card> {
    raw_list.iter().map(to_card).collect()
}
