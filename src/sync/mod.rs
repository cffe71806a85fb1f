//! Sync module for batch file downloading.
//!
//! This module provides:
//! - The batch download sync task
//! - Request, outcome, and report types
//! - The in-flight download registry
//! - The transfer trait implemented by storage clients

pub mod registry;
pub mod request;
pub mod task;
pub mod transfer;

pub use registry::{InFlightGuard, InFlightRegistry};
pub use request::{SyncOutcome, SyncReport, SyncRequest};
pub use task::{SyncOptions, SyncTask};
pub use transfer::Transfer;
