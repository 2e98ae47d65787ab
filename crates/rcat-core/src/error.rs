//! # Error Hierarchy
//!
//! Structured errors for the catalog data layer, built with `thiserror`.
//!
//! None of these errors escape the public projection operations: projectors
//! log them and fall back to defaulted view-models. They exist so that the
//! failure is named once, logged with context, and testable in isolation.

use thiserror::Error;

/// Failure while normalizing one raw upstream record.
///
/// Individual malformed fields are not errors; they are logged and treated
/// as absent by [`crate::RawCountry::from_value`].
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The record is not a JSON object (null, array, scalar).
    #[error("country record is not a JSON object (found {found})")]
    NotAnObject {
        /// JSON type name of the offending value.
        found: &'static str,
    },
}

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Country code is not three ASCII letters.
    #[error("invalid country code: \"{0}\" (expected 3 ASCII letters, e.g. DEU)")]
    InvalidCountryCode(String),

    /// Region name is not one of the upstream region names or the ALL sentinel.
    #[error("unknown region: \"{0}\"")]
    UnknownRegion(String),
}

/// Return the JSON type name of a value, for diagnostics.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
