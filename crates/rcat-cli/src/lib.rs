//! # rcat-cli: Terminal Renderer for the Country Catalog
//!
//! The binary is a thin rendering collaborator: it builds a
//! [`rcat_catalog::CountryCatalog`], calls its operations, and prints the
//! resulting cards or detail. All data rules live in the library crates.

pub mod detail;
pub mod list;
pub mod render;
pub mod settings;
