//! Error types for the cloudsync application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // Server errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    // Sync errors
    #[error("Sync request contains no file paths")]
    EmptySyncRequest,

    #[error("Transfer failed for {path}: {message}")]
    Transfer { path: String, message: String },

    #[error("Sync cancelled")]
    Cancelled,

    // File system errors
    #[error("Invalid remote path: {0}")]
    InvalidRemotePath(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a transfer error for a remote path from any displayable cause.
    pub fn transfer(path: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Error::Transfer {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Process exit codes for the CLI binary.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CANCELLED: i32 = 1;
    pub const AUTH_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const SYNC_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
