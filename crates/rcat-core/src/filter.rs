//! # Filter Engine
//!
//! Applies the region and search predicates to a card collection.
//!
//! - **Region**: case-insensitive equality against `Card::region`. Disabled
//!   when the region is empty or the `ALL` sentinel.
//! - **Search**: case-insensitive substring match against `Card::name`.
//!   Disabled when the search text is empty. Callers trim the text first.
//!
//! Active predicates compose by logical AND. With no active predicate the
//! result is the input collection in its original order. The input is never
//! mutated; sorting is a separate, explicit step ([`sort_cards`]).

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::ValidationError;

/// Upstream region names, plus the sentinel meaning "every region".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    All,
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    /// Region value that disables the region predicate.
    pub const ALL_SENTINEL: &'static str = "ALL";

    /// Every concrete region, in display order.
    pub const CONCRETE: [Region; 6] = [
        Region::Africa,
        Region::Americas,
        Region::Antarctic,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    /// The string used in the upstream `region` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Antarctic => "Antarctic",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            return Ok(Self::All);
        }
        Self::CONCRETE
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownRegion(s.to_string()))
    }
}

/// Active region/search constraint pair. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub region: String,
    pub search: String,
}

impl FilterState {
    pub fn new(region: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            search: search.into(),
        }
    }

    /// Whether the region predicate participates.
    pub fn region_active(&self) -> bool {
        !self.region.is_empty() && !self.region.eq_ignore_ascii_case(Region::ALL_SENTINEL)
    }

    /// Whether the search predicate participates.
    pub fn search_active(&self) -> bool {
        !self.search.is_empty()
    }

    /// Whether `card` satisfies every active predicate.
    pub fn matches(&self, card: &Card) -> bool {
        let region_ok = !self.region_active() || eq_ignore_case(&card.region, &self.region);
        let search_ok = !self.search_active() || contains_ignore_case(&card.name, &self.search);
        region_ok && search_ok
    }
}

/// Return the cards satisfying `filter`, in input order.
pub fn apply(cards: &[Card], filter: &FilterState) -> Vec<Card> {
    cards.iter().filter(|c| filter.matches(c)).cloned().collect()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Explicit ordering applied by callers after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Name, case-insensitive ascending.
    Name,
    /// Population, largest first.
    Population,
}

/// Sort cards in place. Stable, so ties keep their upstream order.
pub fn sort_cards(cards: &mut [Card], key: SortKey) {
    match key {
        SortKey::Name => cards.sort_by(|a, b| cmp_name(&a.name, &b.name)),
        SortKey::Population => cards.sort_by(|a, b| b.population.cmp(&a.population)),
    }
}

fn cmp_name(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
