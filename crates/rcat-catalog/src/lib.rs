//! # rcat-catalog: Country Catalog Orchestrator
//!
//! [`CountryCatalog`] is the single owner of the loaded country data. The
//! rendering layer holds an instance (typically behind an `Arc`) and calls:
//!
//! - [`CountryCatalog::fetch_all`] to load or refresh the list,
//! - [`CountryCatalog::set_region_filter`] / [`CountryCatalog::set_search_filter`]
//!   to narrow it,
//! - [`CountryCatalog::fetch_detail`] for one country's full view.
//!
//! Transport and persistence are injected ([`rcat_client::Transport`],
//! [`CatalogStore`]), so there is no process-wide state.

pub mod catalog;
pub mod store;

pub use catalog::{CatalogPhase, CatalogSnapshot, CountryCatalog, SNAPSHOT_KEY};
pub use store::{CatalogStore, FileStore, MemoryStore, StoreError};
