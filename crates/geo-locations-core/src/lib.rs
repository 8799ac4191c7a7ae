// crates/geo-locations-core/src/lib.rs

//! # geo-locations-core
//!
//! Read-only access to a bundled geographic reference dataset: countries,
//! currencies, flags, and per-country states with their cities.
//!
//! Documents are plain JSON files under a data directory:
//!
//! ```text
//! countries.json          [{"code": "US", "name": "United States", ...}, ...]
//! currencies.json         [{"country_code": "US", "currency_code": "USD", "currency_name": "...", ...}, ...]
//! flags.json              {"US": {"name": "...", "code": "US", "emoji": "...", "svg_url": "..."}, ...}
//! locations/<CC>.json     {"states": {"CA": [<reserved>, "California", {"1": "Los Angeles", ...}]}}
//! ```
//!
//! Nothing is read until it is asked for, and nothing is read twice. Lookups
//! return `Result<Option<T>>`: `Ok(None)` means the data has no such entry,
//! `Err(GeoError)` means a document could not be loaded.
//!
//! ```no_run
//! use geo_locations_core::prelude::*;
//!
//! let geo = GeoLocations::bundled();
//! if let Some(cities) = geo.cities_by_state("US", "CA")? {
//!     for (id, name) in cities.iter().take(5) {
//!         println!("{id}: {name}");
//!     }
//! }
//! # Ok::<(), GeoError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod accessor;
pub mod common;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod search;
pub mod traits;

// Re-exports
pub use crate::accessor::GeoLocations;
pub use crate::common::DataStats;
pub use crate::config::{GeoConfig, DATA_DIR_ENV};
pub use crate::error::{Category, GeoError, LoadCause, Result};
pub use crate::loader::{DirSource, MemorySource};
pub use crate::model::{
    CityMap, Country, CountryData, Currency, Flag, FlagMap, LocationDocument, State, StateMap,
};
pub use crate::traits::{DataSource, NameMatch};

/// Bring common types and traits into scope.
pub mod prelude {
    pub use crate::{
        Category, CityMap, Country, CountryData, Currency, DataSource, DataStats, DirSource, Flag,
        FlagMap, GeoConfig, GeoError, GeoLocations, LocationDocument, MemorySource, NameMatch,
        Result, State, StateMap,
    };
}
