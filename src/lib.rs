//! cloudsync - Batch file download for cloud storage servers
//!
//! This library downloads an ordered list of remote file paths from a cloud
//! storage server, one at a time, reporting progress and honoring mid-run
//! cancellation. Per-file failures are aggregated into a single outcome
//! without aborting the batch.
//!
//! # Features
//!
//! - Sequential, paced batch downloads
//! - Progress notifications marshalled onto a dedicated presenter task
//! - Cooperative cancellation, polled once per file
//! - Duplicate-download prevention across concurrent runs
//! - JSON catalog of locally-known files
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tokio_util::sync::CancellationToken;
//! use url::Url;
//!
//! use cloudsync::{
//!     Catalog, ConsoleNotifier, InFlightRegistry, StorageClient, SyncOptions, SyncRequest,
//!     SyncTask,
//! };
//! use cloudsync::notify::spawn_presenter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StorageClient::new(
//!         Url::parse("https://cloud.example.com/files")?,
//!         "token".to_string(),
//!         "cloudsync".to_string(),
//!     )?;
//!     let catalog = Catalog::from_remote_paths("/sync".as_ref(), ["/Photos/trip.jpg"]);
//!     let (notifier, presenter) = spawn_presenter(ConsoleNotifier::new(true, true));
//!
//!     let task = SyncTask::new(
//!         Arc::new(client),
//!         Arc::new(catalog),
//!         notifier,
//!         InFlightRegistry::new(),
//!         CancellationToken::new(),
//!         SyncOptions::default(),
//!     );
//!     let outcome = task.run(SyncRequest::new(["/Photos/trip.jpg"])).await;
//!
//!     drop(task);
//!     presenter.await?;
//!     println!("{:?}", outcome);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod notify;
pub mod output;
pub mod sync;

// Re-exports for convenience
pub use api::StorageClient;
pub use catalog::{Catalog, FileRecord, RecordStore};
pub use config::Config;
pub use error::{Error, Result};
pub use notify::{ConsoleNotifier, Notifier, NotifierHandle, SyncEvent};
pub use sync::{
    InFlightRegistry, SyncOptions, SyncOutcome, SyncReport, SyncRequest, SyncTask, Transfer,
};
