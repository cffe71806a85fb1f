//! Storage API module.

pub mod client;

pub use client::StorageClient;
