// crates/geo-locations-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) through a [`DataSource`]
//! and turns raw bytes into typed documents.

use crate::error::{Category, GeoError, LoadCause, Result};
use crate::traits::DataSource;
use serde::de::DeserializeOwned;

mod common_io;
mod source;

pub use source::{DirSource, MemorySource};

/// Read and parse an optional document.
///
/// `Ok(None)` means the source has no such document. I/O and parse problems
/// are reported as [`GeoError::Load`] for `category`.
pub(crate) fn load_optional<T, S>(source: &S, category: Category) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let name = category.document_name();
    let bytes = match source.read(&name) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Ok(None),
        Err(e) => return Err(GeoError::load(category, e)),
    };

    match serde_json::from_slice(&bytes) {
        Ok(doc) => Ok(Some(doc)),
        Err(e) => Err(GeoError::load(category, e)),
    }
}

/// Read and parse a document that must exist.
pub(crate) fn load_required<T, S>(source: &S, category: Category) -> Result<T>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let name = category.document_name();
    load_optional(source, category.clone())?
        .ok_or_else(|| GeoError::load(category, LoadCause::Missing(name)))
}
