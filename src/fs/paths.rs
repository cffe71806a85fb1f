//! Path and directory management.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Map a remote path to its location under the sync directory.
///
/// Rejects paths that would escape the sync directory via `..` components
/// or an absolute re-rooting.
pub fn local_path_for(sync_dir: &Path, remote_path: &str) -> Result<PathBuf> {
    let relative = remote_path.trim_start_matches('/');

    if relative.is_empty() {
        return Err(Error::InvalidRemotePath(remote_path.to_string()));
    }

    let relative = Path::new(relative);
    for component in relative.components() {
        match component {
            Component::Normal(_) => {}
            _ => return Err(Error::InvalidRemotePath(remote_path.to_string())),
        }
    }

    Ok(sync_dir.join(relative))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_for_simple() {
        let path = local_path_for(Path::new("/sync"), "/Photos/trip.jpg").unwrap();
        assert_eq!(path, PathBuf::from("/sync/Photos/trip.jpg"));
    }

    #[test]
    fn test_local_path_for_no_leading_slash() {
        let path = local_path_for(Path::new("/sync"), "notes.txt").unwrap();
        assert_eq!(path, PathBuf::from("/sync/notes.txt"));
    }

    #[test]
    fn test_local_path_for_rejects_traversal() {
        assert!(local_path_for(Path::new("/sync"), "/../etc/passwd").is_err());
        assert!(local_path_for(Path::new("/sync"), "/Photos/../../secret").is_err());
    }

    #[test]
    fn test_local_path_for_rejects_empty() {
        assert!(local_path_for(Path::new("/sync"), "/").is_err());
        assert!(local_path_for(Path::new("/sync"), "").is_err());
    }
}
