//! Filesystem module.
//!
//! Provides:
//! - Remote-path to local-path mapping
//! - Directory management

pub mod paths;

pub use paths::{ensure_dir, local_path_for};
