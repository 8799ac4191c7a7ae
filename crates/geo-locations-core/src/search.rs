// crates/geo-locations-core/src/search.rs

//! Lookups over the cached documents.
//!
//! Every lookup is a linear scan or a single map lookup; the dataset has a
//! few hundred countries, so no index is built. Code matches are exact and
//! case-sensitive, name matches are case-insensitive (see [`NameMatch`]).
//! When several entries match, the first one in file order wins.

use crate::accessor::GeoLocations;
use crate::error::Result;
use crate::model::{CityMap, Country, CountryData, Currency, Flag, StateMap};
use crate::traits::{DataSource, NameMatch};
use std::sync::Arc;

impl<S: DataSource> GeoLocations<S> {
    pub fn country_by_code(&self, code: &str) -> Result<Option<&Country>> {
        Ok(self.countries()?.iter().find(|c| c.code == code))
    }

    pub fn country_by_name(&self, name: &str) -> Result<Option<&Country>> {
        Ok(self.countries()?.iter().find(|c| c.is_named(name)))
    }

    pub fn currency_by_country_code(&self, country_code: &str) -> Result<Option<&Currency>> {
        Ok(self
            .currencies()?
            .iter()
            .find(|c| c.country_code == country_code))
    }

    pub fn currency_by_code(&self, currency_code: &str) -> Result<Option<&Currency>> {
        Ok(self
            .currencies()?
            .iter()
            .find(|c| c.currency_code == currency_code))
    }

    pub fn flag_by_country_code(&self, country_code: &str) -> Result<Option<&Flag>> {
        Ok(self.flags()?.get(country_code))
    }

    /// States of a country, or `None` when it has no location document
    /// (or the document has no `states`).
    pub fn states_by_country_code(&self, country_code: &str) -> Result<Option<Arc<StateMap>>> {
        Ok(self
            .location_document(country_code)?
            .and_then(|doc| doc.states.clone()))
    }

    /// Cities of one state. `None` if the country has no location document,
    /// the state code is unknown, or the state carries no cities.
    pub fn cities_by_state(
        &self,
        country_code: &str,
        state_code: &str,
    ) -> Result<Option<Arc<CityMap>>> {
        Ok(self
            .location_document(country_code)?
            .and_then(|doc| doc.cities(state_code).cloned()))
    }

    /// Country plus its currency, flag and location document.
    ///
    /// `Ok(None)` only when the country itself is unknown; the other parts
    /// are looked up independently and may each be missing.
    pub fn complete_country_data(&self, country_code: &str) -> Result<Option<CountryData<'_>>> {
        let Some(country) = self.country_by_code(country_code)? else {
            return Ok(None);
        };

        Ok(Some(CountryData {
            country,
            currency: self.currency_by_country_code(country_code)?,
            flag: self.flag_by_country_code(country_code)?,
            locations: self.location_document(country_code)?,
        }))
    }
}
