// crates/geo-locations-core/src/model/country.rs
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A country entry from `countries.json`.
///
/// Only `code` and `name` are interpreted. Every other field of the source
/// object is kept verbatim in `extra` and written back on serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Country {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Opaque string field passthrough, e.g. `country.field("capital")`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// A currency entry from `currencies.json`.
///
/// A country may appear in more than one entry; lookups return the first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub country_code: String,
    pub currency_code: String,
    pub currency_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A flag entry from `flags.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub name: String,
    pub code: String,
    pub emoji: String,
    pub svg_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Flags keyed by country code.
pub type FlagMap = BTreeMap<String, Flag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_country_fields_survive_a_roundtrip() {
        let src = r#"{"code":"US","name":"United States","capital":"Washington","phone":"+1"}"#;
        let c: Country = serde_json::from_str(src).unwrap();
        assert_eq!(c.code(), "US");
        assert_eq!(c.field("capital"), Some("Washington"));
        assert_eq!(c.field("missing"), None);

        let back: Value = serde_json::to_value(&c).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(src).unwrap());
    }

    #[test]
    fn country_name_matching_is_case_insensitive_exact() {
        let c: Country = serde_json::from_str(r#"{"code":"FR","name":"France"}"#).unwrap();
        assert!(c.is_named("france"));
        assert!(c.is_named("FRANCE"));
        assert!(!c.is_named("fran"));
        assert!(!c.is_named(" France"));
    }

    #[test]
    fn flag_requires_its_fields() {
        let err = serde_json::from_str::<Flag>(r#"{"name":"Japan","code":"JP"}"#);
        assert!(err.is_err());
    }
}
