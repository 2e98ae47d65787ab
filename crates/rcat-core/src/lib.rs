//! # rcat-core: Country Catalog Data Layer
//!
//! Pure, I/O-free transformations between the upstream REST Countries
//! payloads and the two view-models the rendering layer consumes.
//!
//! ## Components
//!
//! - [`RawCountry`]: partial-record normalization of one untrusted upstream
//!   object, with the defaulting policy in one place.
//! - [`NameIndex`]: code -> common-name lookup built from the full list.
//! - [`to_cards`]: list projection into [`Card`] summaries.
//! - [`to_detail`]: single-record projection into a [`Detail`], resolving
//!   border codes through the index.
//! - [`filter::apply`]: combined region + search filtering over cards.
//!
//! ## Failure Policy
//!
//! No operation in this crate returns an error to its caller. Malformed input
//! degrades to documented defaults and is logged through `tracing`; lookup
//! misses are not errors at all.

pub mod card;
pub mod code;
pub mod detail;
pub mod error;
pub mod filter;
pub mod name_index;
pub mod raw;
pub mod text;

pub use card::{to_card, to_cards, Card};
pub use code::CountryCode;
pub use detail::{to_detail, Detail};
pub use error::{ProjectionError, ValidationError};
pub use filter::{sort_cards, FilterState, Region, SortKey};
pub use name_index::NameIndex;
pub use raw::RawCountry;
