// crates/geo-locations-core/src/error.rs

//! # Errors
//!
//! Only structural failures are errors. A lookup that finds nothing is
//! `Ok(None)`, never an `Err`.

use std::fmt;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Which backing document a load failure refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Countries,
    Currencies,
    Flags,
    /// Per-country location document, carrying the country code.
    Locations(String),
}

impl Category {
    /// Document name relative to the data root, without extension.
    pub fn document_name(&self) -> String {
        match self {
            Category::Countries => "countries".to_owned(),
            Category::Currencies => "currencies".to_owned(),
            Category::Flags => "flags".to_owned(),
            Category::Locations(code) => format!("locations/{code}"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Countries => f.write_str("countries data"),
            Category::Currencies => f.write_str("currencies data"),
            Category::Flags => f.write_str("flags data"),
            Category::Locations(code) => write!(f, "locations for {code}"),
        }
    }
}

/// Underlying reason a document could not be loaded.
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required document does not exist in the data source.
    #[error("document `{0}` not found")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Failed to load {category}: {cause}")]
    Load {
        category: Category,
        #[source]
        cause: LoadCause,
    },
}

impl GeoError {
    pub(crate) fn load(category: Category, cause: impl Into<LoadCause>) -> Self {
        GeoError::Load {
            category,
            cause: cause.into(),
        }
    }

    /// The category whose document failed to load.
    pub fn category(&self) -> &Category {
        match self {
            GeoError::Load { category, .. } => category,
        }
    }

    /// True when the failure is a JSON parse error rather than I/O.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GeoError::Load {
                cause: LoadCause::Json(_),
                ..
            }
        )
    }
}
