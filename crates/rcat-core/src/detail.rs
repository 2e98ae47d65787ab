//! # Detail Projection
//!
//! Maps a single raw upstream record plus the current [`NameIndex`] to the
//! full [`Detail`] view-model.
//!
//! ## Rules
//!
//! - **Native name.** The record's language codes are scanned in the order
//!   received. The first code with an entry under `name.nativeName` decides:
//!   its `common` value is used, or the common name if that entry has none.
//!   With no matching entry the common name is used. Language order does not
//!   reflect how widely a language is spoken, so for multilingual countries
//!   this picks a plausible native name rather than the dominant one.
//! - **Currencies / languages.** All values in received order, joined with
//!   `", "`. Currency names are title-cased. An empty or absent collection
//!   renders as `"N/A"`.
//! - **Borders.** Each code is resolved through the index; misses pass through
//!   as the raw code, so the list length always equals the input length.
//! - **Failure.** A record that cannot be normalized yields the
//!   maximally-defaulted [`Detail`] and an error log line, never a panic or
//!   an error returned to the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::name_index::NameIndex;
use crate::raw::RawCountry;
use crate::text::{join_or_not_available, title_case};

/// Full per-country view-model for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub name: String,
    pub native_name: String,
    pub population: u64,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub top_level_domain: String,
    /// Comma-joined, title-cased currency names.
    pub currencies: String,
    /// Comma-joined language names.
    pub languages: String,
    /// Neighbor display names, or raw codes where the index has no entry.
    pub borders: Vec<String>,
    pub flag_url: String,
    pub flag_alt: String,
}

impl Detail {
    /// Build a detail from a normalized record.
    pub fn from_raw(raw: &RawCountry, names: &NameIndex) -> Self {
        let name = raw.name_or_default();
        Self {
            native_name: native_name(raw).unwrap_or_else(|| name.clone()),
            population: raw.population_or_default(),
            region: raw.region_or_default(),
            subregion: raw.subregion_or_default(),
            capital: raw.capital_or_default(),
            top_level_domain: raw.tld_or_default(),
            currencies: currencies(raw),
            languages: languages(raw),
            borders: borders(raw, names),
            flag_url: raw.flag_url_or_default(),
            flag_alt: raw.flag_alt_or_default(),
            name,
        }
    }
}

impl Default for Detail {
    fn default() -> Self {
        Self::from_raw(&RawCountry::default(), &NameIndex::new())
    }
}

/// Project one raw record into a detail view-model.
pub fn to_detail(value: &Value, names: &NameIndex) -> Detail {
    match RawCountry::from_value(value) {
        Ok(raw) => Detail::from_raw(&raw, names),
        Err(e) => {
            tracing::error!(error = %e, "failed to project country detail, using defaults");
            Detail::default()
        }
    }
}

fn native_name(raw: &RawCountry) -> Option<String> {
    let native = raw.name.as_ref()?.native_name.as_ref()?;
    let languages = raw.languages.as_ref()?;
    let entry = languages.keys().find_map(|code| native.get(code))?;
    entry
        .get("common")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn currencies(raw: &RawCountry) -> String {
    let names = raw
        .currencies
        .iter()
        .flat_map(|map| map.values())
        .filter_map(|currency| currency.get("name").and_then(Value::as_str))
        .map(title_case);
    join_or_not_available(names)
}

fn languages(raw: &RawCountry) -> String {
    let names = raw
        .languages
        .iter()
        .flat_map(|map| map.values())
        .filter_map(Value::as_str);
    join_or_not_available(names)
}

fn borders(raw: &RawCountry, names: &NameIndex) -> Vec<String> {
    raw.borders
        .iter()
        .flatten()
        .map(|code| match code {
            Value::String(s) => names.resolve(s),
            other => other.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::CountryCode;
    use serde_json::json;

    fn index(entries: &[(&str, &str)]) -> NameIndex {
        entries
            .iter()
            .map(|(c, n)| (CountryCode::new(c).unwrap(), n.to_string()))
            .collect()
    }

    fn belgium() -> Value {
        json!({
            "name": {
                "common": "Belgium",
                "official": "Kingdom of Belgium",
                "nativeName": {
                    "deu": { "official": "Königreich Belgien", "common": "Belgien" },
                    "fra": { "official": "Royaume de Belgique", "common": "Belgique" },
                    "nld": { "official": "Koninkrijk België", "common": "België" }
                }
            },
            "tld": [".be"],
            "currencies": { "EUR": { "name": "euro", "symbol": "€" } },
            "capital": ["Brussels"],
            "region": "Europe",
            "subregion": "Western Europe",
            "languages": { "nld": "Dutch", "fra": "French", "deu": "German" },
            "borders": ["FRA", "DEU", "LUX", "NLD"],
            "population": 11555997,
            "flags": { "svg": "https://flagcdn.com/be.svg", "alt": "Black, yellow and red" },
            "cca3": "BEL"
        })
    }

    #[test]
    fn projects_full_record() {
        let names = index(&[("FRA", "France"), ("DEU", "Germany"), ("NLD", "Netherlands")]);
        let detail = to_detail(&belgium(), &names);

        assert_eq!(detail.name, "Belgium");
        assert_eq!(detail.native_name, "België");
        assert_eq!(detail.population, 11_555_997);
        assert_eq!(detail.region, "Europe");
        assert_eq!(detail.subregion, "Western Europe");
        assert_eq!(detail.capital, "Brussels");
        assert_eq!(detail.top_level_domain, ".be");
        assert_eq!(detail.currencies, "Euro");
        assert_eq!(detail.languages, "Dutch, French, German");
        assert_eq!(detail.borders, ["France", "Germany", "LUX", "Netherlands"]);
        assert_eq!(detail.flag_url, "https://flagcdn.com/be.svg");
        assert_eq!(detail.flag_alt, "Black, yellow and red");
    }

    #[test]
    fn unresolved_border_codes_pass_through() {
        let names = index(&[("DEU", "Germany")]);
        let detail = to_detail(&json!({ "borders": ["XXX", "DEU"] }), &names);
        assert_eq!(detail.borders, ["XXX", "Germany"]);
    }

    #[test]
    fn non_array_borders_yield_empty_list() {
        let detail = to_detail(&json!({ "borders": "DEU" }), &NameIndex::new());
        assert!(detail.borders.is_empty());
        let detail = to_detail(&json!({}), &NameIndex::new());
        assert!(detail.borders.is_empty());
    }

    #[test]
    fn native_name_uses_first_language_with_an_entry() {
        let detail = to_detail(
            &json!({
                "name": {
                    "common": "Testland",
                    "nativeName": { "tst": { "common": "Testlandia" } }
                },
                "languages": { "eng": "English", "tst": "Testish" }
            }),
            &NameIndex::new(),
        );
        assert_eq!(detail.native_name, "Testlandia");
    }

    #[test]
    fn native_name_falls_back_to_common_name() {
        let detail = to_detail(
            &json!({
                "name": { "common": "Testland", "nativeName": { "xyz": { "common": "Other" } } },
                "languages": { "eng": "English" }
            }),
            &NameIndex::new(),
        );
        assert_eq!(detail.native_name, "Testland");

        let no_languages = to_detail(&json!({ "name": { "common": "Testland" } }), &NameIndex::new());
        assert_eq!(no_languages.native_name, "Testland");
    }

    #[test]
    fn multiple_currencies_are_title_cased_and_joined() {
        let detail = to_detail(
            &json!({
                "currencies": {
                    "CHF": { "name": "swiss franc", "symbol": "Fr." },
                    "EUR": { "name": "euro", "symbol": "€" }
                }
            }),
            &NameIndex::new(),
        );
        assert_eq!(detail.currencies, "Swiss Franc, Euro");
    }

    #[test]
    fn empty_collections_render_not_available() {
        let detail = to_detail(&json!({ "currencies": {}, "languages": {} }), &NameIndex::new());
        assert_eq!(detail.currencies, "N/A");
        assert_eq!(detail.languages, "N/A");
    }

    #[test]
    fn malformed_record_yields_defaulted_detail() {
        let detail = to_detail(&json!("not a country"), &NameIndex::new());
        assert_eq!(detail, Detail::default());
        assert_eq!(detail.name, "Unknown");
        assert_eq!(detail.native_name, "Unknown");
        assert_eq!(detail.capital, "N/A");
        assert_eq!(detail.top_level_domain, "N/A");
        assert_eq!(detail.currencies, "N/A");
        assert_eq!(detail.languages, "N/A");
        assert_eq!(detail.subregion, "Unknown");
        assert_eq!(detail.flag_alt, "Flag of Unknown");
        assert!(detail.borders.is_empty());
    }
}
