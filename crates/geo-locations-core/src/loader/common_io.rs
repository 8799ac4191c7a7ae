// crates/geo-locations-core/src/loader/common_io.rs
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Resolve `name` under `root` to an existing file.
///
/// Prefers `<name>.json`; with `compact` enabled falls back to
/// `<name>.json.gz`. Returns `Ok(None)` when neither exists; any other
/// failure to stat a candidate is an error.
pub fn resolve(root: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    let plain = root.join(format!("{name}.json"));
    if is_document(&plain)? {
        return Ok(Some(plain));
    }

    #[cfg(feature = "compact")]
    {
        let gz = root.join(format!("{name}.json.gz"));
        if is_document(&gz)? {
            return Ok(Some(gz));
        }
    }

    Ok(None)
}

fn is_document(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. Returns a generic Reader so the caller doesn't care about
/// the compression.
pub fn open_stream(path: &Path) -> io::Result<Box<dyn Read>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

/// Slurp a (possibly compressed) file into memory.
pub fn read_all(path: &Path) -> io::Result<Vec<u8>> {
    let mut stream = open_stream(path)?;
    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_prefers_plain_json() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("flags.json"), "{}").unwrap();
        fs::write(dir.path().join("flags.json.gz"), "junk").unwrap();

        let path = resolve(dir.path(), "flags").unwrap().unwrap();
        assert_eq!(path, dir.path().join("flags.json"));
    }

    #[test]
    fn resolve_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(resolve(dir.path(), "countries").unwrap().is_none());
        assert!(resolve(dir.path(), "locations/US").unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_reports_unreadable_paths() {
        let dir = TempDir::new().unwrap();
        // A file where the `locations` directory should be: stat fails with ENOTDIR.
        fs::write(dir.path().join("locations"), "").unwrap();

        let err = resolve(dir.path(), "locations/US").unwrap_err();
        assert_ne!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_documents_are_decoded() {
        use flate2::{write::GzEncoder, Compression};
        use std::io::Write;

        let dir = TempDir::new().unwrap();
        let gz_path = dir.path().join("countries.json.gz");
        let mut encoder = GzEncoder::new(fs::File::create(&gz_path).unwrap(), Compression::default());
        encoder.write_all(br#"[{"code":"US","name":"United States"}]"#).unwrap();
        encoder.finish().unwrap();

        let path = resolve(dir.path(), "countries").unwrap().unwrap();
        assert_eq!(path, gz_path);
        let bytes = read_all(&path).unwrap();
        assert_eq!(bytes, br#"[{"code":"US","name":"United States"}]"#);
    }
}
