//! In-flight download registry.
//!
//! Shared between concurrently running sync tasks so the same remote path is
//! never downloaded twice at once. Claims are RAII guards; dropping a guard
//! releases the path.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Clonable handle to the shared set of in-flight remote paths.
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a path for download.
    ///
    /// Returns `None` if another task already holds the path.
    pub fn try_claim(&self, remote_path: &str) -> Option<InFlightGuard> {
        let mut paths = self.inner.lock().unwrap();

        if !paths.insert(remote_path.to_string()) {
            return None;
        }

        Some(InFlightGuard {
            registry: Arc::clone(&self.inner),
            remote_path: remote_path.to_string(),
        })
    }

    /// Whether a path is currently being downloaded.
    pub fn is_in_flight(&self, remote_path: &str) -> bool {
        self.inner.lock().unwrap().contains(remote_path)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}

/// Releases the claimed path when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: Arc<Mutex<HashSet<String>>>,
    remote_path: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.lock().unwrap().remove(&self.remote_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_and_release() {
        let registry = InFlightRegistry::new();

        let guard = registry.try_claim("/a.txt").unwrap();
        assert!(registry.is_in_flight("/a.txt"));
        assert_eq!(registry.len(), 1);

        drop(guard);
        assert!(!registry.is_in_flight("/a.txt"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_double_claim_rejected() {
        let registry = InFlightRegistry::new();

        let _guard = registry.try_claim("/a.txt").unwrap();
        assert!(registry.try_claim("/a.txt").is_none());

        // A different path is still claimable.
        assert!(registry.try_claim("/b.txt").is_some());
    }

    #[test]
    fn test_shared_across_clones() {
        let registry = InFlightRegistry::new();
        let other = registry.clone();

        let _guard = registry.try_claim("/a.txt").unwrap();
        assert!(other.try_claim("/a.txt").is_none());
        assert!(other.is_in_flight("/a.txt"));
    }
}
