//! # Country Code Newtype
//!
//! [`CountryCode`] is the three-letter identifier (`cca3` upstream) used as
//! the key of the name index and as the element type of a country's border
//! list. Codes are normalized to upper case at construction so that index
//! inserts and border lookups agree regardless of the case the API used.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A three-letter country code such as `DEU` or `FRA`.
///
/// # Validation
///
/// Exactly three ASCII letters after trimming surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, validating and upper-casing it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCountryCode`] if the trimmed input is
    /// not exactly three ASCII letters.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.len() != 3 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_letters_and_uppercases() {
        assert_eq!(CountryCode::new("deu").unwrap().as_str(), "DEU");
        assert_eq!(CountryCode::new(" Fra ").unwrap().as_str(), "FRA");
    }

    #[test]
    fn rejects_wrong_length_or_non_letters() {
        for bad in ["", "DE", "DEUT", "D3U", "   ", "DÉU"] {
            assert!(CountryCode::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: CountryCode = serde_json::from_str("\"usa\"").unwrap();
        assert_eq!(ok.as_str(), "USA");
        assert!(serde_json::from_str::<CountryCode>("\"US\"").is_err());
    }

    #[test]
    fn display_matches_as_str() {
        let code: CountryCode = "chn".parse().unwrap();
        assert_eq!(code.to_string(), "CHN");
    }
}
