use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for an accessor.
///
/// Returned by [`crate::GeoLocations::stats`]. The first three counts cover
/// the required documents; `cached_locations` is the number of per-country
/// location documents loaded so far, not the number available on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStats {
    pub countries: usize,
    pub currencies: usize,
    pub flags: usize,
    pub cached_locations: usize,
}
