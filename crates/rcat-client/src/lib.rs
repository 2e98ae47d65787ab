//! # rcat-client: REST Countries Transport
//!
//! The leaf of the catalog: issues one HTTP GET, parses JSON, and converts
//! every failure into `None` rather than an error. See [`Transport`].
//!
//! ## Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/v3.1/all?fields=name,capital,population,region,flags,cca3` | Full country list |
//! | GET | `/v3.1/name/{name}?fullText=true` | Exact common-name match (single-element array) |

pub mod config;
pub mod error;
pub mod transport;

pub use config::{CatalogConfig, ConfigError};
pub use error::TransportError;
pub use transport::{HttpTransport, Transport};
