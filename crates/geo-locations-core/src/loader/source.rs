// crates/geo-locations-core/src/loader/source.rs
use super::common_io;
use crate::traits::DataSource;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Documents stored as files under a root directory.
///
/// `countries` resolves to `<root>/countries.json` (or `.json.gz` with the
/// `compact` feature), `locations/US` to `<root>/locations/US.json`.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DataSource for DirSource {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        match common_io::resolve(&self.root, name)? {
            Some(path) => common_io::read_all(&path).map(Some),
            None => Ok(None),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// Documents held in memory, keyed by document name.
///
/// Handy for embedding a dataset into a binary (`include_bytes!`) and for
/// tests that want full control over what the accessor sees.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.insert(name, body);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<Vec<u8>>) {
        self.docs.insert(name.into(), body.into());
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DataSource for MemorySource {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.docs.get(name).cloned())
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.docs.len())
    }
}
