// crates/geo-locations-core/src/model/composite.rs
use super::{Country, Currency, Flag, LocationDocument};
use serde::Serialize;
use std::sync::Arc;

/// Everything known about one country.
///
/// Only `country` is guaranteed; the dataset is not uniformly complete, so
/// currency, flag and locations are each optional.
#[derive(Clone, Debug, Serialize)]
pub struct CountryData<'a> {
    pub country: &'a Country,
    pub currency: Option<&'a Currency>,
    pub flag: Option<&'a Flag>,
    pub locations: Option<Arc<LocationDocument>>,
}

impl CountryData<'_> {
    /// True when every optional part is present.
    pub fn is_complete(&self) -> bool {
        self.currency.is_some() && self.flag.is_some() && self.locations.is_some()
    }
}
