//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Cloud storage batch download CLI.
#[derive(Parser, Debug)]
#[command(
    name = "cloudsync",
    version,
    about = "Batch-download files from a cloud storage server",
    long_about = "Downloads a list of remote file paths sequentially into a local sync\n\
                  directory, with per-file progress and prompt cancellation via Ctrl-C."
)]
pub struct Args {
    /// Remote file path(s) to download, in order.
    #[arg(required = true, num_args = 1..)]
    pub paths: Vec<String>,

    /// Base URL of the storage server.
    #[arg(short, long, env = "CLOUDSYNC_SERVER")]
    pub server: Option<String>,

    /// Bearer token for download requests.
    #[arg(short, long, env = "CLOUDSYNC_TOKEN")]
    pub token: Option<String>,

    /// Directory downloaded files are placed under.
    #[arg(short = 'd', long = "directory")]
    pub sync_directory: Option<PathBuf>,

    /// JSON catalog index of locally-known files.
    #[arg(long = "index")]
    pub catalog_index: Option<PathBuf>,

    /// Milliseconds to pause before each file transfer.
    #[arg(long)]
    pub pacing_delay: Option<u64>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide the progress bar and the skipped-paths summary.
    #[arg(long, short)]
    pub quiet: bool,

    /// Include skipped paths in the final summary.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }

        if let Some(token) = &self.token {
            config.server.auth_token = token.clone();
        }

        if let Some(dir) = &self.sync_directory {
            config.options.sync_directory = Some(dir.clone());
        }

        if let Some(index) = &self.catalog_index {
            config.options.catalog_index = Some(index.clone());
        }

        if let Some(delay) = self.pacing_delay {
            config.options.pacing_delay_ms = delay;
        }

        if self.quiet {
            config.options.show_progress = false;
            config.options.show_skipped = false;
        }

        if self.show_skipped {
            config.options.show_skipped = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OptionsConfig, ServerConfig};

    #[test]
    fn test_merge_overrides_config() {
        let args = Args::parse_from([
            "cloudsync",
            "--server",
            "https://cloud.example.com",
            "--token",
            "cli-token",
            "--pacing-delay",
            "100",
            "--quiet",
            "/Photos/trip.jpg",
        ]);

        let mut config = Config {
            server: ServerConfig::default(),
            options: OptionsConfig::default(),
        };
        args.merge_into_config(&mut config);

        assert_eq!(config.server.base_url, "https://cloud.example.com");
        assert_eq!(config.server.auth_token, "cli-token");
        assert_eq!(config.options.pacing_delay_ms, 100);
        assert!(!config.options.show_progress);
        assert!(!config.options.show_skipped);
        assert_eq!(args.paths, vec!["/Photos/trip.jpg"]);
    }

    #[test]
    fn test_show_skipped_overrides_quiet() {
        let args = Args::parse_from(["cloudsync", "--quiet", "--show-skipped", "/a.txt"]);

        let mut config = Config {
            server: ServerConfig::default(),
            options: OptionsConfig::default(),
        };
        args.merge_into_config(&mut config);

        assert!(!config.options.show_progress);
        assert!(config.options.show_skipped);
    }

    #[test]
    fn test_merge_keeps_config_defaults() {
        let args = Args::parse_from(["cloudsync", "/a.txt", "/b.txt"]);

        let mut config = Config {
            server: ServerConfig {
                base_url: "https://from-config.example.com".to_string(),
                auth_token: "config-token".to_string(),
                user_agent: "ua".to_string(),
            },
            options: OptionsConfig::default(),
        };
        args.merge_into_config(&mut config);

        assert_eq!(config.server.base_url, "https://from-config.example.com");
        assert_eq!(config.options.pacing_delay_ms, 1000);
        assert!(config.options.show_progress);
        assert!(config.options.show_skipped);
        assert_eq!(args.paths.len(), 2);
    }
}
