// crates/geo-locations-core/src/model/mod.rs
pub mod composite;
pub mod country;
pub mod location;

pub use composite::CountryData;
pub use country::{Country, Currency, Flag, FlagMap};
pub use location::{CityMap, LocationDocument, State, StateMap};
pub(crate) use location::LocationDocumentRaw;
