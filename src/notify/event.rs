//! Notification events emitted by a sync run.

use crate::sync::{SyncOutcome, SyncReport};

/// State transitions surfaced to the user during a sync run.
///
/// A run emits `Started`, then one `Progress` per resolved file in list
/// order, then `Finished`. `Dismissed` clears the progress indicator and is
/// sent after a failed run, or immediately when the run is cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    Started {
        total: usize,
    },
    Progress {
        current: usize,
        total: usize,
        name: String,
    },
    Finished {
        outcome: SyncOutcome,
        report: SyncReport,
    },
    Dismissed,
}
