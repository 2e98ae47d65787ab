//! # CountryCatalog
//!
//! Owns the authoritative card collection, the name index, and the active
//! filter state, and exposes fetch-all, fetch-detail, and filter operations
//! to the rendering layer.
//!
//! ## Lifecycle
//!
//! ```text
//!   Empty ──fetch_all ok──▶ Loaded ──fetch_all ok──▶ Loaded (replaced)
//!     ▲  ╲                    │  ╲
//!     │   fetch_all failed    │   fetch_all failed: state untouched
//!     │   (stays Empty)       │
//!     └──────── reset ────────┘
//! ```
//!
//! Cards and name index always come from the same upstream list: they live
//! in one [`CatalogSnapshot`] that is swapped as a unit. Every successful
//! fetch-all (and every restore) resets the filter state.
//!
//! ## Concurrency
//!
//! The state lock is `parking_lot` and is never held across an `.await`.
//! Operations suspend inside the transport call, and `fetch_all` also while
//! its already-installed snapshot is persisted on the blocking pool. A
//! `fetch_detail` running while a `fetch_all` is in flight resolves borders
//! against whichever snapshot is installed when it reads the index, which
//! happens after its own request completes. A filter call
//! updates the filter and computes its result under one write lock, so the
//! returned cards always match the state it just set.

use std::sync::Arc;

use parking_lot::RwLock;
use rcat_client::{CatalogConfig, HttpTransport, Transport, TransportError};
use rcat_core::filter::{self, Region};
use rcat_core::{to_cards, to_detail, Card, Detail, FilterState, NameIndex};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::CatalogStore;

/// Store key under which the last good snapshot is persisted.
pub const SNAPSHOT_KEY: &str = "catalog-snapshot";

/// Cards and name index derived from one upstream list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub cards: Vec<Card>,
    pub names: NameIndex,
}

impl CatalogSnapshot {
    /// Build both halves from the same raw list.
    pub fn from_raw(raw_list: &[Value]) -> Self {
        Self {
            names: NameIndex::build(raw_list),
            cards: to_cards(raw_list),
        }
    }
}

/// Whether the catalog currently holds a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    Empty,
    Loaded,
}

#[derive(Debug, Default)]
struct CatalogState {
    snapshot: Option<Arc<CatalogSnapshot>>,
    filter: FilterState,
}

impl CatalogState {
    fn filtered(&self) -> Vec<Card> {
        let result = match &self.snapshot {
            Some(snapshot) => filter::apply(&snapshot.cards, &self.filter),
            None => Vec::new(),
        };
        tracing::debug!(
            region = %self.filter.region,
            search = %self.filter.search,
            count = result.len(),
            "applied catalog filters"
        );
        result
    }
}

/// The catalog orchestrator. Share it behind an `Arc`.
pub struct CountryCatalog {
    config: CatalogConfig,
    transport: Arc<dyn Transport>,
    store: Option<Arc<dyn CatalogStore>>,
    state: RwLock<CatalogState>,
}

impl std::fmt::Debug for CountryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryCatalog")
            .field("config", &self.config)
            .field("phase", &self.phase())
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

impl CountryCatalog {
    /// Create an empty catalog over an injected transport.
    pub fn new(config: CatalogConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            store: None,
            state: RwLock::new(CatalogState::default()),
        }
    }

    /// Create an empty catalog over a fresh [`HttpTransport`].
    pub fn over_http(config: CatalogConfig) -> Result<Self, TransportError> {
        Ok(Self::new(config, Arc::new(HttpTransport::new()?)))
    }

    /// Persist every successful load to `store` and allow [`Self::restore`].
    pub fn with_store(mut self, store: Arc<dyn CatalogStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch the full list and replace cards, name index and filter state.
    ///
    /// Returns the new cards in upstream order. On failure returns an empty
    /// list and leaves any previous snapshot in place.
    pub async fn fetch_all(&self) -> Vec<Card> {
        let url = &self.config.all_countries_url;
        let Some(payload) = self.transport.request(url).await else {
            tracing::warn!(url = %url, "country list unavailable, keeping current catalog");
            return Vec::new();
        };
        let Value::Array(raw_list) = payload else {
            tracing::warn!(url = %url, "country list payload is not an array, keeping current catalog");
            return Vec::new();
        };

        let snapshot = Arc::new(CatalogSnapshot::from_raw(&raw_list));
        {
            let mut state = self.state.write();
            state.snapshot = Some(Arc::clone(&snapshot));
            state.filter = FilterState::default();
        }
        tracing::info!(
            count = snapshot.cards.len(),
            indexed = snapshot.names.len(),
            "country catalog loaded"
        );

        let cards = snapshot.cards.clone();
        self.persist(snapshot).await;
        cards
    }

    /// Fetch and project the detail view for the country named `name`.
    ///
    /// Returns `None` for an empty name, when the upstream has no data, when
    /// the payload is not an array, or when the exact-match query returns no
    /// record.
    pub async fn fetch_detail(&self, name: &str) -> Option<Detail> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let url = self.config.detail_url(name);
        let Some(payload) = self.transport.request(&url).await else {
            tracing::warn!(name, "no data returned for country");
            return None;
        };
        let Value::Array(mut items) = payload else {
            tracing::warn!(name, "country detail payload is not an array");
            return None;
        };
        if items.is_empty() {
            tracing::warn!(name, "no country matched exactly");
            return None;
        }
        let record = items.swap_remove(0);

        // Read the index only after the request completes.
        let snapshot = self.snapshot();
        let empty = NameIndex::new();
        let names = snapshot.as_deref().map_or(&empty, |s| &s.names);
        Some(to_detail(&record, names))
    }

    /// Set the region constraint and return the cards matching the full
    /// filter state. `""` and `"ALL"` clear the constraint.
    pub fn set_region_filter(&self, region: &str) -> Vec<Card> {
        let region = region.trim();
        let mut state = self.state.write();
        state.filter.region = if region.eq_ignore_ascii_case(Region::ALL_SENTINEL) {
            String::new()
        } else {
            region.to_string()
        };
        state.filtered()
    }

    /// Set the search text (trimmed) and return the cards matching the full
    /// filter state. `""` clears the constraint.
    pub fn set_search_filter(&self, text: &str) -> Vec<Card> {
        let mut state = self.state.write();
        state.filter.search = text.trim().to_string();
        state.filtered()
    }

    /// Cards matching the current filter state.
    pub fn filtered(&self) -> Vec<Card> {
        self.state.read().filtered()
    }

    /// All cards of the current snapshot, unfiltered.
    pub fn cards(&self) -> Vec<Card> {
        self.snapshot()
            .map(|s| s.cards.clone())
            .unwrap_or_default()
    }

    /// Copy of the current name index (empty before the first load).
    pub fn name_index(&self) -> NameIndex {
        self.snapshot()
            .map(|s| s.names.clone())
            .unwrap_or_default()
    }

    pub fn filter_state(&self) -> FilterState {
        self.state.read().filter.clone()
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Option<Arc<CatalogSnapshot>> {
        self.state.read().snapshot.clone()
    }

    pub fn phase(&self) -> CatalogPhase {
        if self.state.read().snapshot.is_some() {
            CatalogPhase::Loaded
        } else {
            CatalogPhase::Empty
        }
    }

    /// Drop the snapshot and filters, returning to [`CatalogPhase::Empty`].
    /// The persisted snapshot, if any, is left alone.
    pub fn reset(&self) {
        *self.state.write() = CatalogState::default();
    }

    /// Install the persisted snapshot, if one exists.
    ///
    /// The stored value is trusted and installed as-is. Returns whether a
    /// snapshot was installed; any failure is logged and leaves state untouched.
    pub fn restore(&self) -> bool {
        let Some(store) = &self.store else {
            return false;
        };
        let value = match store.load(SNAPSHOT_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "could not load persisted catalog");
                return false;
            }
        };
        let snapshot: CatalogSnapshot = match serde_json::from_value(value) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "persisted catalog has an unexpected shape");
                return false;
            }
        };

        let count = snapshot.cards.len();
        {
            let mut state = self.state.write();
            state.snapshot = Some(Arc::new(snapshot));
            state.filter = FilterState::default();
        }
        tracing::info!(count, "country catalog restored from store");
        true
    }

    /// Best-effort save of `snapshot`. Store I/O runs on the blocking pool.
    async fn persist(&self, snapshot: Arc<CatalogSnapshot>) {
        let Some(store) = self.store.clone() else {
            return;
        };
        let value = match serde_json::to_value(&*snapshot) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize catalog snapshot");
                return;
            }
        };
        match tokio::task::spawn_blocking(move || store.save(SNAPSHOT_KEY, &value)).await {
            Ok(Ok(())) => tracing::debug!(key = SNAPSHOT_KEY, "catalog snapshot persisted"),
            Ok(Err(e)) => tracing::warn!(error = %e, "could not persist catalog snapshot"),
            Err(e) => tracing::warn!(error = %e, "catalog persistence task failed"),
        }
    }
}
