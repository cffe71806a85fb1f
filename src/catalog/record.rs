//! Locally-known file records.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file known to the local catalog, resolved from a remote path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Server-side path identifying the file.
    pub remote_path: String,

    /// Display name (the final path segment).
    pub file_name: String,

    /// Where the file lives (or will live) on disk.
    pub local_path: PathBuf,

    /// Size in bytes, if the server reported one.
    #[serde(default)]
    pub size: Option<u64>,

    /// Server etag from the last sync, if any.
    #[serde(default)]
    pub etag: Option<String>,

    /// Last known remote modification time.
    #[serde(default)]
    pub modified: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Create a record for a remote path, deriving the display name from it.
    pub fn new(remote_path: impl Into<String>, local_path: impl Into<PathBuf>) -> Self {
        let remote_path = remote_path.into();
        let file_name = file_name_of(&remote_path);

        Self {
            remote_path,
            file_name,
            local_path: local_path.into(),
            size: None,
            etag: None,
            modified: None,
        }
    }

    /// Name shown in progress notifications.
    pub fn display_name(&self) -> &str {
        &self.file_name
    }

    /// Parent directory of the local path, if it has one.
    pub fn local_parent(&self) -> Option<&Path> {
        self.local_path.parent()
    }
}

/// Extract the final segment of a remote path for display.
fn file_name_of(remote_path: &str) -> String {
    remote_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(remote_path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_remote_path() {
        let record = FileRecord::new("/Photos/2024/trip.jpg", "/tmp/trip.jpg");
        assert_eq!(record.display_name(), "trip.jpg");
    }

    #[test]
    fn test_display_name_trailing_slash() {
        let record = FileRecord::new("/Documents/reports/", "/tmp/reports");
        assert_eq!(record.display_name(), "reports");
    }

    #[test]
    fn test_display_name_bare_path() {
        let record = FileRecord::new("notes.txt", "/tmp/notes.txt");
        assert_eq!(record.display_name(), "notes.txt");
    }
}
