//! Sync request and result types.

/// Ordered list of remote paths to download in one batch.
///
/// Constructed from caller input, consumed by exactly one [`run`] and
/// discarded; the task owns no state beyond the run.
///
/// [`run`]: crate::sync::SyncTask::run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub paths: Vec<String>,
}

impl SyncRequest {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Aggregate result of one sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Success,
    Failure,
}

/// Per-run statistics.
///
/// `skipped` counts paths with no local record and paths already claimed by a
/// concurrent run; neither affects the outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub downloaded: u64,
    pub failed: u64,
    pub skipped: u64,
}

impl SyncReport {
    /// Whether every attempted transfer succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn total_attempted(&self) -> u64 {
        self.downloaded + self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_strs() {
        let request = SyncRequest::new(["/a.txt", "/b.txt"]);
        assert_eq!(request.len(), 2);
        assert!(!request.is_empty());
    }

    #[test]
    fn test_report_aggregation() {
        let report = SyncReport {
            downloaded: 3,
            failed: 1,
            skipped: 2,
        };
        assert!(!report.all_succeeded());
        assert_eq!(report.total_attempted(), 4);
    }
}
