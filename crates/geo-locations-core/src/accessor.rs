// crates/geo-locations-core/src/accessor.rs

//! # Accessor
//!
//! Owns the per-category caches and decides when to hit the data source.
//! Query helpers built on top of these caches live in [`crate::search`].

use crate::common::DataStats;
use crate::config::GeoConfig;
use crate::error::{Category, Result};
use crate::loader::{self, DirSource};
use crate::model::{Country, Currency, FlagMap, LocationDocument, LocationDocumentRaw};
use crate::traits::DataSource;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace, warn};

// One init cell per country code, so two countries never wait on each other.
type LocationCell = Arc<OnceCell<Arc<LocationDocument>>>;

// Process-wide instance, configured from the environment on first use.
static GLOBAL: OnceCell<GeoLocations> = OnceCell::new();

/// Lazily loaded, read-only view over a geo-locations dataset.
///
/// Each category (countries, currencies, flags) is read from the
/// [`DataSource`] on first access and kept for the lifetime of the value.
/// Location documents are loaded per country, on demand.
///
/// A failed load is never cached: the error is returned and the next call
/// tries again.
///
/// ```no_run
/// use geo_locations_core::GeoLocations;
///
/// let geo = GeoLocations::bundled();
/// if let Some(us) = geo.country_by_code("US")? {
///     println!("{} ({})", us.name(), us.code());
/// }
/// # Ok::<(), geo_locations_core::GeoError>(())
/// ```
#[derive(Debug)]
pub struct GeoLocations<S: DataSource = DirSource> {
    source: S,
    countries: OnceCell<Vec<Country>>,
    currencies: OnceCell<Vec<Currency>>,
    flags: OnceCell<FlagMap>,
    locations: Mutex<HashMap<String, LocationCell>>,
}

impl GeoLocations<DirSource> {
    /// Accessor over a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_source(DirSource::new(data_dir))
    }

    /// Accessor over the dataset bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(GeoConfig::bundled_data_dir())
    }

    pub fn from_config(config: &GeoConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Shared instance for the whole process.
    ///
    /// Configured from [`GeoConfig::from_env`] the first time it is called;
    /// later changes to the environment have no effect.
    pub fn global() -> &'static GeoLocations {
        GLOBAL.get_or_init(|| Self::from_config(&GeoConfig::from_env()))
    }

    pub fn data_dir(&self) -> &std::path::Path {
        self.source.root()
    }
}

impl<S: DataSource> GeoLocations<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            countries: OnceCell::new(),
            currencies: OnceCell::new(),
            flags: OnceCell::new(),
            locations: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// All countries, in file order.
    pub fn countries(&self) -> Result<&[Country]> {
        self.countries
            .get_or_try_init(|| self.load_required(Category::Countries))
            .map(Vec::as_slice)
    }

    /// All currencies, in file order.
    pub fn currencies(&self) -> Result<&[Currency]> {
        self.currencies
            .get_or_try_init(|| self.load_required(Category::Currencies))
            .map(Vec::as_slice)
    }

    /// All flags, keyed by country code.
    pub fn flags(&self) -> Result<&FlagMap> {
        self.flags.get_or_try_init(|| self.load_required(Category::Flags))
    }

    /// The states-and-cities document for `country_code`.
    ///
    /// Loaded and cached on first request. `Ok(None)` when the country has
    /// no location document; a missing document is not cached, so one that
    /// appears later will be picked up.
    pub fn location_document(&self, country_code: &str) -> Result<Option<Arc<LocationDocument>>> {
        if !is_location_code(country_code) {
            trace!(country_code, "rejecting location code");
            return Ok(None);
        }

        let cell = self.location_cell(country_code);
        // Err(None) = no such document, Err(Some(_)) = failed to load it.
        let loaded = cell.get_or_try_init(|| match self.load_location(country_code) {
            Ok(Some(doc)) => Ok(Arc::new(doc)),
            Ok(None) => Err(None),
            Err(e) => Err(Some(e)),
        });

        match loaded {
            Ok(doc) => Ok(Some(Arc::clone(doc))),
            Err(missing_or_failed) => {
                self.release_location_cell(country_code, &cell);
                missing_or_failed.map_or(Ok(None), Err)
            }
        }
    }

    /// Country codes whose location document is currently cached, sorted.
    pub fn cached_location_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .lock_locations()
            .iter()
            .filter(|(_, cell)| cell.get().is_some())
            .map(|(code, _)| code.clone())
            .collect();
        codes.sort();
        codes
    }

    /// Counts for the required documents plus cached location documents.
    ///
    /// Loads countries, currencies and flags if they are not loaded yet.
    pub fn stats(&self) -> Result<DataStats> {
        Ok(DataStats {
            countries: self.countries()?.len(),
            currencies: self.currencies()?.len(),
            flags: self.flags()?.len(),
            cached_locations: self.cached_location_codes().len(),
        })
    }

    // -----------------------------------------------------------------------
    // INTERNAL HELPERS
    // -----------------------------------------------------------------------

    fn load_required<T: DeserializeOwned>(&self, category: Category) -> Result<T> {
        debug!(%category, source = %self.source.describe(), "loading document");
        loader::load_required(&self.source, category).map_err(|e| {
            warn!(error = %e, "document failed to load");
            e
        })
    }

    fn load_location(&self, country_code: &str) -> Result<Option<LocationDocument>> {
        let category = Category::Locations(country_code.to_owned());
        debug!(%category, source = %self.source.describe(), "loading document");

        let raw: Option<LocationDocumentRaw> = loader::load_optional(&self.source, category)
            .map_err(|e| {
                warn!(error = %e, "document failed to load");
                e
            })?;

        if raw.is_none() {
            debug!(country_code, "no location document");
        }
        Ok(raw.map(|raw| LocationDocument::from_raw(country_code, raw)))
    }

    fn location_cell(&self, country_code: &str) -> LocationCell {
        let mut cells = self.lock_locations();
        Arc::clone(cells.entry(country_code.to_owned()).or_default())
    }

    /// Drops the entry for a code whose document was absent or failed to load,
    /// unless another caller has swapped in a different cell or filled it.
    fn release_location_cell(&self, country_code: &str, cell: &LocationCell) {
        let mut cells = self.lock_locations();
        let stale = cells
            .get(country_code)
            .is_some_and(|current| Arc::ptr_eq(current, cell) && current.get().is_none());
        if stale {
            cells.remove(country_code);
        }
    }

    fn lock_locations(&self) -> MutexGuard<'_, HashMap<String, LocationCell>> {
        // Entries are inserted and removed whole, so a poisoned lock is still consistent.
        self.locations.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Codes are spliced into a document name (`locations/<code>`), so only plain
/// identifiers can name a location document.
fn is_location_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GeoError, LoadCause};
    use crate::loader::MemorySource;
    use std::collections::HashMap;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Wraps a source and counts reads per document name.
    #[derive(Default)]
    struct CountingSource {
        inner: MemorySource,
        reads: Mutex<HashMap<String, usize>>,
        total: AtomicUsize,
    }

    impl CountingSource {
        fn new(inner: MemorySource) -> Self {
            Self {
                inner,
                ..Default::default()
            }
        }

        fn reads(&self, name: &str) -> usize {
            self.reads.lock().unwrap().get(name).copied().unwrap_or(0)
        }
    }

    impl DataSource for CountingSource {
        fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
            *self.reads.lock().unwrap().entry(name.to_owned()).or_default() += 1;
            self.total.fetch_add(1, Ordering::SeqCst);
            self.inner.read(name)
        }
    }

    fn fixture() -> MemorySource {
        MemorySource::new()
            .with(
                "countries",
                r#"[{"code":"US","name":"United States"},{"code":"JP","name":"Japan"}]"#,
            )
            .with(
                "currencies",
                r#"[{"country_code":"US","currency_code":"USD","currency_name":"US Dollar"}]"#,
            )
            .with(
                "flags",
                r#"{"JP":{"name":"Japan","code":"JP","emoji":"🇯🇵","svg_url":"https://flags.example/jp.svg"}}"#,
            )
            .with(
                "locations/US",
                r#"{"states":{"CA":[1,"California",{"1":"Los Angeles","2":"San Francisco"}]}}"#,
            )
    }

    #[test]
    fn nothing_is_read_until_asked() {
        let geo = GeoLocations::with_source(CountingSource::new(fixture()));
        assert_eq!(geo.source().total.load(Ordering::SeqCst), 0);
        geo.flags().unwrap();
        assert_eq!(geo.source().total.load(Ordering::SeqCst), 1);
        assert_eq!(geo.source().reads("flags"), 1);
        assert_eq!(geo.source().reads("countries"), 0);
    }

    #[test]
    fn each_category_is_read_once() {
        let geo = GeoLocations::with_source(CountingSource::new(fixture()));

        let first = geo.countries().unwrap();
        let second = geo.countries().unwrap();
        assert!(std::ptr::eq(first, second));
        geo.currencies().unwrap();
        geo.currencies().unwrap();
        geo.flags().unwrap();
        geo.flags().unwrap();

        assert_eq!(geo.source().reads("countries"), 1);
        assert_eq!(geo.source().reads("currencies"), 1);
        assert_eq!(geo.source().reads("flags"), 1);
    }

    #[test]
    fn location_documents_are_cached_per_country() {
        let geo = GeoLocations::with_source(CountingSource::new(fixture()));

        let a = geo.location_document("US").unwrap().unwrap();
        let b = geo.location_document("US").unwrap().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(geo.source().reads("locations/US"), 1);
        assert_eq!(geo.cached_location_codes(), vec!["US".to_string()]);
    }

    #[test]
    fn missing_location_document_is_absent_and_not_cached() {
        let geo = GeoLocations::with_source(CountingSource::new(fixture()));

        assert!(geo.location_document("JP").unwrap().is_none());
        assert!(geo.location_document("JP").unwrap().is_none());
        assert_eq!(geo.source().reads("locations/JP"), 2);
        assert!(geo.cached_location_codes().is_empty());
    }

    #[test]
    fn misses_leave_no_location_entries_behind() {
        let geo = GeoLocations::with_source(MemorySource::new());

        for i in 0..1_000 {
            let code = format!("X{i}");
            assert!(geo.location_document(&code).unwrap().is_none());
        }
        assert!(geo.lock_locations().is_empty());

        let geo = GeoLocations::with_source(fixture());
        geo.location_document("US").unwrap();
        geo.location_document("JP").unwrap();
        assert_eq!(geo.lock_locations().len(), 1);
        assert_eq!(geo.cached_location_codes(), vec!["US".to_string()]);
    }

    #[test]
    fn suspicious_codes_never_reach_the_source() {
        let geo = GeoLocations::with_source(CountingSource::new(fixture()));

        for code in ["", "../countries", "US/../../etc", "U S", "US.json"] {
            assert!(geo.location_document(code).unwrap().is_none(), "{code:?}");
        }
        assert_eq!(geo.source().total.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn corrupt_location_document_is_an_error() {
        let src = fixture().with("locations/FR", "{\"states\": [");
        let geo = GeoLocations::with_source(src);

        let err = geo.location_document("FR").unwrap_err();
        assert!(geo.lock_locations().is_empty());
        assert_eq!(err.category(), &Category::Locations("FR".into()));
        assert!(err.is_parse_error());
        assert!(err.to_string().starts_with("Failed to load locations for FR: JSON error"));
    }

    #[test]
    fn missing_required_document_reports_category() {
        let geo = GeoLocations::with_source(MemorySource::new());
        match geo.currencies().unwrap_err() {
            GeoError::Load {
                category: Category::Currencies,
                cause: LoadCause::Missing(name),
            } => assert_eq!(name, "currencies"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stats_counts_loaded_documents() {
        let geo = GeoLocations::with_source(fixture());
        geo.location_document("US").unwrap();

        let stats = geo.stats().unwrap();
        assert_eq!(
            stats,
            DataStats {
                countries: 2,
                currencies: 1,
                flags: 1,
                cached_locations: 1,
            }
        );
    }

    #[test]
    fn concurrent_first_access_loads_once() {
        let geo = Arc::new(GeoLocations::with_source(CountingSource::new(fixture())));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let geo = Arc::clone(&geo);
                std::thread::spawn(move || {
                    assert_eq!(geo.countries().unwrap().len(), 2);
                    assert!(geo.location_document("US").unwrap().is_some());
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(geo.source().reads("countries"), 1);
        assert_eq!(geo.source().reads("locations/US"), 1);
    }

    #[test]
    fn location_code_validation() {
        assert!(is_location_code("US"));
        assert!(is_location_code("GB-SCT"));
        assert!(!is_location_code(""));
        assert!(!is_location_code("a/b"));
        assert!(!is_location_code(".."));
    }
}
