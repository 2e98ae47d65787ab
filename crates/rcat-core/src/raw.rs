//! # Raw Record Normalization
//!
//! [`RawCountry`] is the partial-record view of one upstream country object.
//! Every field is optional and decoded leniently: a field carrying the wrong
//! JSON type is treated as absent instead of failing the whole record. The
//! defaulting policy shared by cards and details lives here, in the
//! `*_or_default` accessors, so the two projections cannot disagree.
//!
//! ## Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | name | `"Unknown"` |
//! | capital | `"N/A"` |
//! | population | `0` |
//! | region / subregion | `"Unknown"` |
//! | top-level domain | `"N/A"` |
//! | flag URL | `""` |
//! | flag alt text | `"Flag of {name}"` |

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{json_type_name, ProjectionError};

/// Placeholder for absent names and regions.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for absent capital, top-level domain, currencies and languages.
pub const NOT_AVAILABLE: &str = "N/A";

/// Synthesized alt text for a flag image.
pub fn flag_alt_for(name: &str) -> String {
    format!("Flag of {name}")
}

/// Decode `obj[key]` as `T`. Absent and `null` values are silently `None`;
/// a present value of the wrong shape is logged and also `None`.
///
/// `path` is the dotted location used in the log line; its last segment is
/// the key looked up in `obj`.
fn field<T: DeserializeOwned>(obj: &Map<String, Value>, path: &'static str) -> Option<T> {
    let key = path.rsplit('.').next().unwrap_or(path);
    let value = obj.get(key).filter(|v| !v.is_null())?;
    match <T as serde::Deserialize>::deserialize(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!(
                field = path,
                found = json_type_name(value),
                error = %e,
                "ignoring malformed country field"
            );
            None
        }
    }
}

/// Nested object under `obj[key]`, with the same logging rules as [`field`].
fn object<'a>(obj: &'a Map<String, Value>, path: &'static str) -> Option<&'a Map<String, Value>> {
    let key = path.rsplit('.').next().unwrap_or(path);
    let value = obj.get(key).filter(|v| !v.is_null())?;
    let nested = value.as_object();
    if nested.is_none() {
        tracing::warn!(
            field = path,
            found = json_type_name(value),
            "ignoring malformed country field"
        );
    }
    nested
}

/// `name` object of an upstream record.
#[derive(Debug, Clone, Default)]
pub struct RawName {
    pub common: Option<String>,
    /// Language code -> `{ official, common }`, in upstream order.
    pub native_name: Option<Map<String, Value>>,
}

impl RawName {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            common: field(obj, "name.common"),
            native_name: field(obj, "name.nativeName"),
        }
    }
}

/// `flags` object of an upstream record.
#[derive(Debug, Clone, Default)]
pub struct RawFlags {
    pub svg: Option<String>,
    pub png: Option<String>,
    pub alt: Option<String>,
}

impl RawFlags {
    fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            svg: field(obj, "flags.svg"),
            png: field(obj, "flags.png"),
            alt: field(obj, "flags.alt"),
        }
    }
}

/// One upstream country record with every field optional.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default)]
pub struct RawCountry {
    pub name: Option<RawName>,
    pub capital: Option<Vec<String>>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub tld: Option<Vec<String>>,
    /// Currency code -> `{ name, symbol }`, in upstream order.
    pub currencies: Option<Map<String, Value>>,
    /// Language code -> display name, in upstream order.
    pub languages: Option<Map<String, Value>>,
    /// Kept as raw values so a stray non-string entry cannot drop the list.
    pub borders: Option<Vec<Value>>,
    pub flags: Option<RawFlags>,
    pub cca3: Option<String>,
}

impl RawCountry {
    /// Normalize one upstream JSON value into a partial record.
    ///
    /// Fields of the wrong JSON type are logged at `warn` and treated as
    /// absent; they never fail the record.
    ///
    /// # Errors
    ///
    /// [`ProjectionError::NotAnObject`] if `value` is not a JSON object.
    pub fn from_value(value: &Value) -> Result<Self, ProjectionError> {
        let Some(obj) = value.as_object() else {
            return Err(ProjectionError::NotAnObject {
                found: json_type_name(value),
            });
        };
        Ok(Self {
            name: object(obj, "name").map(RawName::from_object),
            capital: field(obj, "capital"),
            population: field(obj, "population"),
            region: field(obj, "region"),
            subregion: field(obj, "subregion"),
            tld: field(obj, "tld"),
            currencies: field(obj, "currencies"),
            languages: field(obj, "languages"),
            borders: field(obj, "borders"),
            flags: object(obj, "flags").map(RawFlags::from_object),
            cca3: field(obj, "cca3"),
        })
    }

    /// `name.common` exactly as received, if present.
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref()?.common.as_deref()
    }

    pub fn name_or_default(&self) -> String {
        self.common_name().unwrap_or(UNKNOWN).to_string()
    }

    pub fn capital_or_default(&self) -> String {
        first_or(self.capital.as_deref(), NOT_AVAILABLE)
    }

    pub fn population_or_default(&self) -> u64 {
        self.population.unwrap_or(0)
    }

    pub fn region_or_default(&self) -> String {
        self.region.as_deref().unwrap_or(UNKNOWN).to_string()
    }

    pub fn subregion_or_default(&self) -> String {
        self.subregion.as_deref().unwrap_or(UNKNOWN).to_string()
    }

    pub fn tld_or_default(&self) -> String {
        first_or(self.tld.as_deref(), NOT_AVAILABLE)
    }

    /// `flags.svg`, then `flags.png`, then the empty string.
    pub fn flag_url_or_default(&self) -> String {
        self.flags
            .as_ref()
            .and_then(|f| f.svg.as_deref().or(f.png.as_deref()))
            .unwrap_or_default()
            .to_string()
    }

    /// `flags.alt`, or alt text synthesized from the defaulted display name.
    pub fn flag_alt_or_default(&self) -> String {
        match self.flags.as_ref().and_then(|f| f.alt.as_deref()) {
            Some(alt) => alt.to_string(),
            None => flag_alt_for(&self.name_or_default()),
        }
    }
}

fn first_or(values: Option<&[String]>, fallback: &str) -> String {
    values
        .and_then(|v| v.first())
        .map(String::as_str)
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Run `f` with a subscriber that records formatted events, and return them.
    fn captured_logs(f: impl FnOnce()) -> String {
        let buf = Arc::new(Mutex::new(Vec::<u8>::new()));
        let sink = Arc::clone(&buf);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || SharedBuf(Arc::clone(&sink)))
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejects_non_object_records() {
        for value in [json!(null), json!(3), json!("x"), json!([1])] {
            assert!(matches!(
                RawCountry::from_value(&value),
                Err(ProjectionError::NotAnObject { .. })
            ));
        }
    }

    #[test]
    fn empty_object_yields_all_defaults() {
        let raw = RawCountry::from_value(&json!({})).unwrap();
        assert_eq!(raw.name_or_default(), "Unknown");
        assert_eq!(raw.capital_or_default(), "N/A");
        assert_eq!(raw.population_or_default(), 0);
        assert_eq!(raw.region_or_default(), "Unknown");
        assert_eq!(raw.subregion_or_default(), "Unknown");
        assert_eq!(raw.tld_or_default(), "N/A");
        assert_eq!(raw.flag_url_or_default(), "");
        assert_eq!(raw.flag_alt_or_default(), "Flag of Unknown");
    }

    #[test]
    fn wrongly_typed_fields_are_treated_as_absent() {
        let raw = RawCountry::from_value(&json!({
            "name": "Germany",
            "population": "lots",
            "capital": "Berlin",
            "region": 7,
            "flags": true
        }))
        .unwrap();
        assert!(raw.common_name().is_none());
        assert_eq!(raw.population_or_default(), 0);
        assert_eq!(raw.capital_or_default(), "N/A");
        assert_eq!(raw.region_or_default(), "Unknown");
        assert_eq!(raw.flag_url_or_default(), "");
    }

    #[test]
    fn negative_population_defaults_to_zero() {
        let raw = RawCountry::from_value(&json!({ "population": -4 })).unwrap();
        assert_eq!(raw.population_or_default(), 0);
    }

    #[test]
    fn empty_capital_list_defaults() {
        let raw = RawCountry::from_value(&json!({ "capital": [] })).unwrap();
        assert_eq!(raw.capital_or_default(), "N/A");
    }

    #[test]
    fn flag_url_prefers_svg_then_png() {
        let both = RawCountry::from_value(&json!({
            "flags": { "svg": "a.svg", "png": "a.png" }
        }))
        .unwrap();
        assert_eq!(both.flag_url_or_default(), "a.svg");

        let png_only = RawCountry::from_value(&json!({ "flags": { "png": "a.png" } })).unwrap();
        assert_eq!(png_only.flag_url_or_default(), "a.png");
    }

    #[test]
    fn upstream_alt_text_wins_over_synthesized() {
        let raw = RawCountry::from_value(&json!({
            "name": { "common": "Chad" },
            "flags": { "alt": "Blue, gold and red bands" }
        }))
        .unwrap();
        assert_eq!(raw.flag_alt_or_default(), "Blue, gold and red bands");
    }

    #[test]
    fn native_name_keeps_upstream_key_order() {
        let raw = RawCountry::from_value(&json!({
            "name": {
                "common": "Belgium",
                "nativeName": {
                    "nld": { "common": "België" },
                    "deu": { "common": "Belgien" },
                    "fra": { "common": "Belgique" }
                }
            }
        }))
        .unwrap();
        let native = raw.name.unwrap().native_name.unwrap();
        let keys: Vec<&String> = native.keys().collect();
        assert_eq!(keys, ["nld", "deu", "fra"]);
    }

    #[test]
    fn wrongly_typed_fields_are_logged_with_their_path() {
        let logs = captured_logs(|| {
            let raw = RawCountry::from_value(&json!({
                "name": "Germany",
                "capital": "Berlin",
                "flags": { "svg": 3 }
            }))
            .unwrap();
            assert_eq!(raw.name_or_default(), "Unknown");
            assert_eq!(raw.capital_or_default(), "N/A");
        });
        assert!(logs.contains("ignoring malformed country field"), "{logs}");
        assert!(logs.contains("name"), "{logs}");
        assert!(logs.contains("capital"), "{logs}");
        assert!(logs.contains("flags.svg"), "{logs}");
        assert_eq!(logs.matches("ignoring malformed country field").count(), 3, "{logs}");
    }

    #[test]
    fn absent_and_null_fields_are_not_logged() {
        let logs = captured_logs(|| {
            let raw = RawCountry::from_value(&json!({ "capital": null, "flags": null })).unwrap();
            assert_eq!(raw.capital_or_default(), "N/A");
        });
        assert!(logs.is_empty(), "{logs}");
    }
}
