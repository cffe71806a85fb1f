//! Notifier trait and cross-context event dispatch.
//!
//! The sync task runs on an I/O context and must never block on user-visible
//! output. Events are pushed through an unbounded channel to a dedicated
//! presenter task that owns the `Notifier` implementation, so notifications
//! stay strictly ordered without stalling transfers.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::notify::event::SyncEvent;
use crate::sync::{SyncOutcome, SyncReport};

/// Consumes sync events on the presentation context.
pub trait Notifier: Send + 'static {
    fn notify(&mut self, event: SyncEvent);
}

/// Cheap, clonable handle the sync task uses to emit events.
///
/// Sends never block; if the presenter has gone away the event is dropped.
#[derive(Debug, Clone)]
pub struct NotifierHandle {
    tx: mpsc::UnboundedSender<SyncEvent>,
}

impl NotifierHandle {
    pub fn started(&self, total: usize) {
        self.send(SyncEvent::Started { total });
    }

    pub fn progress(&self, current: usize, total: usize, name: impl Into<String>) {
        self.send(SyncEvent::Progress {
            current,
            total,
            name: name.into(),
        });
    }

    pub fn finished(&self, outcome: SyncOutcome, report: SyncReport) {
        self.send(SyncEvent::Finished { outcome, report });
    }

    pub fn dismissed(&self) {
        self.send(SyncEvent::Dismissed);
    }

    fn send(&self, event: SyncEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("Presenter gone, dropping notification");
        }
    }
}

/// Spawn the presenter task that forwards events to a notifier.
///
/// The returned join handle resolves once every handle clone is dropped and
/// the channel drains, so callers can await it to flush final output.
pub fn spawn_presenter<N: Notifier>(mut notifier: N) -> (NotifierHandle, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            notifier.notify(event);
        }
    });

    (NotifierHandle { tx }, handle)
}
