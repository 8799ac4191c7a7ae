// crates/geo-locations-core/src/model/location.rs
use crate::traits::NameMatch;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// City identifier -> city display name.
pub type CityMap = BTreeMap<String, String>;

/// State code -> state.
pub type StateMap = BTreeMap<String, State>;

// ---------------------------------------------------------------------------
// RAW FILE FORMAT
// ---------------------------------------------------------------------------

/// `locations/<CC>.json` as stored on disk.
///
/// ```json
/// { "states": { "CA": [ <reserved>, "California", { "1": "Los Angeles" } ] } }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct LocationDocumentRaw {
    #[serde(default)]
    states: Option<BTreeMap<String, StateRaw>>,
}

/// Positional state triple: `[reserved, name, cities]`.
#[derive(Debug, Deserialize)]
struct StateRaw(
    Value,
    String,
    #[serde(deserialize_with = "cities_slot")] Option<CityMap>,
);

/// Anything but an object in the cities slot (`null`, or the `[]` some
/// exporters write for an empty map) means the state has no cities.
fn cities_slot<'de, D>(deserializer: D) -> Result<Option<CityMap>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => serde_json::from_value(Value::Object(map))
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// PUBLIC MODEL
// ---------------------------------------------------------------------------

/// A first-level administrative division (state, province, region...).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct State {
    pub code: String,
    pub name: String,
    /// Position 0 of the source triple, carried through untouched.
    pub reserved: Value,
    /// `None` when the cities slot of the source triple is not an object.
    pub cities: Option<Arc<CityMap>>,
}

impl State {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cities(&self) -> Option<&Arc<CityMap>> {
        self.cities.as_ref()
    }
}

impl NameMatch for State {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// All states and cities of one country.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationDocument {
    pub country_code: String,
    /// `None` when the document has no `states` object.
    pub states: Option<Arc<StateMap>>,
}

impl LocationDocument {
    pub(crate) fn from_raw(country_code: &str, raw: LocationDocumentRaw) -> Self {
        let states = raw.states.map(|states| {
            let map: StateMap = states
                .into_iter()
                .map(|(code, StateRaw(reserved, name, cities))| {
                    let state = State {
                        code: code.clone(),
                        name,
                        reserved,
                        cities: cities.map(Arc::new),
                    };
                    (code, state)
                })
                .collect();
            Arc::new(map)
        });

        Self {
            country_code: country_code.to_owned(),
            states,
        }
    }

    pub fn states(&self) -> Option<&Arc<StateMap>> {
        self.states.as_ref()
    }

    /// Exact, case-sensitive lookup by state code.
    pub fn state(&self, code: &str) -> Option<&State> {
        self.states.as_ref()?.get(code)
    }

    /// Case-insensitive exact lookup by state name; first in key order wins.
    pub fn state_by_name(&self, name: &str) -> Option<&State> {
        self.states.as_ref()?.values().find(|s| s.is_named(name))
    }

    pub fn cities(&self, state_code: &str) -> Option<&Arc<CityMap>> {
        self.state(state_code)?.cities.as_ref()
    }

    pub fn state_count(&self) -> usize {
        self.states.as_ref().map_or(0, |s| s.len())
    }

    pub fn city_count(&self) -> usize {
        self.states.as_ref().map_or(0, |states| {
            states
                .values()
                .filter_map(|s| s.cities.as_ref())
                .map(|c| c.len())
                .sum()
        })
    }
}
