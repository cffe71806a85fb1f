//! Batch download sync task.
//!
//! Downloads an ordered list of remote paths sequentially, reporting
//! progress through a notifier handle and honoring cooperative cancellation.
//! Per-file transfer failures are recorded but never abort the batch;
//! cancellation aborts immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::catalog::RecordStore;
use crate::error::{Error, Result};
use crate::notify::NotifierHandle;
use crate::sync::registry::InFlightRegistry;
use crate::sync::request::{SyncOutcome, SyncReport, SyncRequest};
use crate::sync::transfer::Transfer;

/// Pacing knobs for one sync run.
#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    /// Fixed pause before each transfer, to avoid hammering the server.
    pub pacing_delay_ms: u64,

    /// Pause between the failure notification and clearing the indicator.
    pub dismiss_delay_ms: u64,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            pacing_delay_ms: 1000,
            dismiss_delay_ms: 1000,
        }
    }
}

/// One batch download run over an injected transfer client and record store.
pub struct SyncTask<T, S> {
    client: Arc<T>,
    store: Arc<S>,
    notifier: NotifierHandle,
    registry: InFlightRegistry,
    cancel: CancellationToken,
    options: SyncOptions,
}

impl<T, S> SyncTask<T, S>
where
    T: Transfer,
    S: RecordStore,
{
    pub fn new(
        client: Arc<T>,
        store: Arc<S>,
        notifier: NotifierHandle,
        registry: InFlightRegistry,
        cancel: CancellationToken,
        options: SyncOptions,
    ) -> Self {
        Self {
            client,
            store,
            notifier,
            registry,
            cancel,
            options,
        }
    }

    /// Run the batch to completion.
    ///
    /// Never propagates an error past this boundary; every run resolves to
    /// exactly one [`SyncOutcome`]. Retrying a failed batch is the caller's
    /// concern.
    pub async fn run(&self, request: SyncRequest) -> SyncOutcome {
        tracing::debug!("Sync started for {} path(s)", request.len());

        match self.execute(&request).await {
            Ok(report) if report.all_succeeded() => {
                tracing::debug!(
                    "Sync completed: {} downloaded, {} skipped",
                    report.downloaded,
                    report.skipped
                );
                self.notifier.finished(SyncOutcome::Success, report);
                SyncOutcome::Success
            }
            Ok(report) => {
                tracing::debug!(
                    "Sync failed: {} downloaded, {} failed, {} skipped",
                    report.downloaded,
                    report.failed,
                    report.skipped
                );
                self.notifier.finished(SyncOutcome::Failure, report);
                sleep(Duration::from_millis(self.options.dismiss_delay_ms)).await;
                self.notifier.dismissed();
                SyncOutcome::Failure
            }
            Err(Error::Cancelled) => {
                tracing::debug!("Sync cancelled");
                self.notifier.dismissed();
                SyncOutcome::Failure
            }
            Err(e) => {
                tracing::warn!("Sync aborted: {}", e);
                SyncOutcome::Failure
            }
        }
    }

    /// The per-path loop. Fails only on an empty request or cancellation;
    /// per-file transfer errors are folded into the report.
    async fn execute(&self, request: &SyncRequest) -> Result<SyncReport> {
        if request.is_empty() {
            return Err(Error::EmptySyncRequest);
        }

        let total = request.len();
        self.notifier.started(total);

        let mut report = SyncReport::default();

        for (index, path) in request.paths.iter().enumerate() {
            // Polled once per path, not mid-transfer.
            if self.cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }

            let Some(record) = self.store.lookup(path) else {
                tracing::warn!("No local record for {}, skipping", path);
                report.skipped += 1;
                continue;
            };

            let Some(_claim) = self.registry.try_claim(path) else {
                tracing::debug!("{} already downloading, skipping", path);
                report.skipped += 1;
                continue;
            };

            self.notifier
                .progress(index + 1, total, record.display_name());

            sleep(Duration::from_millis(self.options.pacing_delay_ms)).await;

            match self.client.download(&record).await {
                Ok(()) => {
                    tracing::debug!("Synced {}", record.remote_path);
                    report.downloaded += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to sync {}: {}", record.remote_path, e);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}
