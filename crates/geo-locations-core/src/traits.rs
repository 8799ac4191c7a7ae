// crates/geo-locations-core/src/traits.rs
use std::io;

/// Storage abstraction: this controls where raw documents come from.
///
/// The accessor never touches the filesystem directly; it asks its source
/// for a document by name (`"countries"`, `"locations/US"`, ...) and parses
/// the bytes it gets back. This keeps the caching logic independent of the
/// storage, so the same accessor works over a directory on disk, bytes
/// embedded in a binary, or an instrumented source in tests.
///
/// Implementors must be `Send + Sync + 'static` so an accessor can be shared
/// across threads (see [`crate::GeoLocations::global`]).
pub trait DataSource: Send + Sync + 'static {
    /// Read the whole document called `name`.
    ///
    /// Returns `Ok(None)` when the document does not exist. Any other
    /// problem (permissions, truncated gzip stream, ...) is an `Err`.
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>>;

    /// Human-readable description used in log lines.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_owned()
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        (**self).read(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Name-based matching helpers for types that expose a display name.
///
/// Matching is case-insensitive but otherwise exact: both sides are
/// lowercased with Unicode case rules and compared for equality. There is no
/// accent folding, trimming or substring matching.
///
/// # Examples
/// ```rust
/// use geo_locations_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("France").is_named("FRANCE"));
/// assert!(Place("Österreich").is_named("österreich"));
/// assert!(!Place("France").is_named("Fran"));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        let name = self.name_str();
        // ASCII fast path.
        if name.is_ascii() && q.is_ascii() {
            return name.eq_ignore_ascii_case(q);
        }
        name.to_lowercase() == q.to_lowercase()
    }
}
