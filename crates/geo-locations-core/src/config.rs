// crates/geo-locations-core/src/config.rs
use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "GEO_LOCATIONS_DATA_DIR";

/// Where an accessor finds its documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoConfig {
    pub data_dir: PathBuf,
}

impl GeoConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The dataset shipped inside this crate.
    ///
    /// Resolved relative to the crate root (`CARGO_MANIFEST_DIR`), so this
    /// works when running from the workspace and when the crate is used as a
    /// dependency, as long as `data/` ships alongside.
    pub fn bundled_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// `$GEO_LOCATIONS_DATA_DIR` when set and non-empty, else the bundled dir.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
    }

    fn resolve(env_dir: Option<PathBuf>) -> Self {
        match env_dir {
            Some(dir) if !dir.as_os_str().is_empty() => Self::new(dir),
            _ => Self::new(Self::bundled_data_dir()),
        }
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
