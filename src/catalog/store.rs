//! Catalog of locally-known files, keyed by remote path.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::record::FileRecord;
use crate::error::{Error, Result};
use crate::fs::local_path_for;

/// Resolves a remote path to a locally-known file record.
///
/// A `None` result means the path is unknown locally; the sync task skips
/// such paths rather than failing the batch.
pub trait RecordStore: Send + Sync {
    fn lookup(&self, remote_path: &str) -> Option<FileRecord>;
}

/// On-disk index format.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogIndex {
    records: Vec<FileRecord>,
}

/// In-memory catalog backed by a JSON index file.
#[derive(Debug, Default)]
pub struct Catalog {
    records: HashMap<String, FileRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a JSON index file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Catalog index not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let index: CatalogIndex = serde_json::from_str(&content)?;

        let mut catalog = Self::new();
        for record in index.records {
            catalog.insert(record);
        }

        Ok(catalog)
    }

    /// Save the catalog to a JSON index file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut records: Vec<&FileRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.remote_path.cmp(&b.remote_path));

        let content = serde_json::to_string_pretty(&CatalogIndex {
            records: records.into_iter().cloned().collect(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build a catalog by mapping remote paths under a sync directory.
    ///
    /// Paths that fail the traversal check are left out; the sync task will
    /// report them as skipped.
    pub fn from_remote_paths<'a, I>(sync_dir: &Path, remote_paths: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut catalog = Self::new();

        for remote_path in remote_paths {
            match local_path_for(sync_dir, remote_path) {
                Ok(local_path) => {
                    catalog.insert(FileRecord::new(remote_path, local_path));
                }
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", remote_path, e);
                }
            }
        }

        catalog
    }

    /// Insert or replace a record, keyed by its remote path.
    pub fn insert(&mut self, record: FileRecord) {
        self.records.insert(record.remote_path.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for Catalog {
    fn lookup(&self, remote_path: &str) -> Option<FileRecord> {
        self.records.get(remote_path).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert(FileRecord::new("/Photos/trip.jpg", "/sync/Photos/trip.jpg"));

        let record = catalog.lookup("/Photos/trip.jpg").unwrap();
        assert_eq!(record.file_name, "trip.jpg");
        assert!(catalog.lookup("/Photos/other.jpg").is_none());
    }

    #[test]
    fn test_from_remote_paths() {
        let catalog = Catalog::from_remote_paths(
            Path::new("/sync"),
            ["/Photos/trip.jpg", "/Documents/notes.txt"],
        );

        assert_eq!(catalog.len(), 2);
        let record = catalog.lookup("/Documents/notes.txt").unwrap();
        assert_eq!(record.local_path, PathBuf::from("/sync/Documents/notes.txt"));
    }

    #[test]
    fn test_from_remote_paths_drops_traversal() {
        let catalog = Catalog::from_remote_paths(Path::new("/sync"), ["/../etc/passwd"]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let index_path = dir.path().join("index.json");

        let mut catalog = Catalog::new();
        let mut record = FileRecord::new("/Photos/trip.jpg", "/sync/Photos/trip.jpg");
        record.size = Some(1024);
        record.etag = Some("abc123".to_string());
        catalog.insert(record);
        catalog.save(&index_path).unwrap();

        let loaded = Catalog::load(&index_path).unwrap();
        assert_eq!(loaded.len(), 1);
        let record = loaded.lookup("/Photos/trip.jpg").unwrap();
        assert_eq!(record.size, Some(1024));
        assert_eq!(record.etag.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_load_missing_index() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
