//! Configuration module for cloudsync.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration and remote-path validation

pub mod loader;
pub mod validation;

pub use loader::{Config, OptionsConfig, ServerConfig};
pub use validation::{validate_config, validate_remote_paths};
