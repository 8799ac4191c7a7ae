//! geo-locations-rs
//!
//! Workspace crate re-exporting [`geo_locations_core`] so the demos in
//! `demos/` can `use geo_locations_rs::prelude::*`.

pub use geo_locations_core::*;
