//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sync::SyncOptions;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Storage server connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the storage server, e.g. `https://cloud.example.com/files`.
    pub base_url: String,

    /// Bearer token used for download requests.
    pub auth_token: String,

    /// User agent string sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Sync options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Directory downloaded files are placed under.
    #[serde(default)]
    pub sync_directory: Option<PathBuf>,

    /// Optional JSON catalog index of locally-known files.
    #[serde(default)]
    pub catalog_index: Option<PathBuf>,

    /// Fixed pause before each file transfer, in milliseconds.
    #[serde(default = "default_pacing_delay_ms")]
    pub pacing_delay_ms: u64,

    /// Pause before clearing the progress indicator after a failure.
    #[serde(default = "default_dismiss_delay_ms")]
    pub dismiss_delay_ms: u64,

    /// Whether to show the progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Whether to include skipped paths in the final summary.
    #[serde(default = "default_true")]
    pub show_skipped: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            sync_directory: None,
            catalog_index: None,
            pacing_delay_ms: default_pacing_delay_ms(),
            dismiss_delay_ms: default_dismiss_delay_ms(),
            show_progress: true,
            show_skipped: true,
        }
    }
}

fn default_user_agent() -> String {
    format!("cloudsync/{}", env!("CARGO_PKG_VERSION"))
}

fn default_pacing_delay_ms() -> u64 {
    1000
}

fn default_dismiss_delay_ms() -> u64 {
    1000
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective sync directory.
    pub fn sync_directory(&self) -> PathBuf {
        self.options.sync_directory.clone().unwrap_or_else(|| {
            directories::UserDirs::new()
                .map(|dirs| dirs.home_dir().join("CloudSync"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    /// Task-level options derived from the configuration.
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            pacing_delay_ms: self.options.pacing_delay_ms,
            dismiss_delay_ms: self.options.dismiss_delay_ms,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            auth_token: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "https://cloud.example.com/files"
auth_token = "secret"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.base_url, "https://cloud.example.com/files");
        assert_eq!(config.options.pacing_delay_ms, 1000);
        assert!(config.options.show_progress);
        assert!(config.options.show_skipped);
    }

    #[test]
    fn test_show_skipped_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
base_url = "https://cloud.example.com/files"
auth_token = "secret"

[options]
show_skipped = false
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.options.show_skipped);
        assert!(config.options.show_progress);
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config {
            server: ServerConfig {
                base_url: "https://cloud.example.com".to_string(),
                auth_token: "secret".to_string(),
                user_agent: default_user_agent(),
            },
            options: OptionsConfig::default(),
        };
        config.options.pacing_delay_ms = 250;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.options.pacing_delay_ms, 250);
        assert_eq!(loaded.server.auth_token, "secret");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
