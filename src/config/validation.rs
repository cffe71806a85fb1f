//! Configuration and input validation.

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Longest pacing delay accepted, in milliseconds.
const MAX_PACING_DELAY_MS: u64 = 60_000;

/// Validate the loaded configuration before connecting.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server.base_url.is_empty() {
        return Err(Error::MissingConfig(
            "server.base_url (set it in config.toml or pass --server)".to_string(),
        ));
    }

    let url = Url::parse(&config.server.base_url)?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::ConfigValidation {
                field: "server.base_url".to_string(),
                message: format!("Unsupported URL scheme '{}'", other),
            });
        }
    }

    if config.server.auth_token.is_empty() {
        return Err(Error::MissingConfig(
            "server.auth_token (set it in config.toml or pass --token)".to_string(),
        ));
    }

    if config.options.pacing_delay_ms > MAX_PACING_DELAY_MS {
        return Err(Error::ConfigValidation {
            field: "options.pacing_delay_ms".to_string(),
            message: format!(
                "Pacing delay {} ms exceeds maximum of {} ms",
                config.options.pacing_delay_ms, MAX_PACING_DELAY_MS
            ),
        });
    }

    Ok(())
}

/// Validate remote path syntax for a sync request.
///
/// Paths must be slash-separated with non-empty segments and must not
/// contain `.` or `..` components.
pub fn validate_remote_paths<S: AsRef<str>>(paths: &[S]) -> Result<()> {
    let pattern = Regex::new(r"^/?([^/]+/)*[^/]+/?$").unwrap();

    for path in paths {
        let path = path.as_ref();

        if !pattern.is_match(path) {
            return Err(Error::InvalidRemotePath(path.to_string()));
        }

        if path.split('/').any(|s| s == "." || s == "..") {
            return Err(Error::InvalidRemotePath(path.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::{OptionsConfig, ServerConfig};

    fn make_test_config() -> Config {
        Config {
            server: ServerConfig {
                base_url: "https://cloud.example.com/files".to_string(),
                auth_token: "secret".to_string(),
                user_agent: "cloudsync-test".to_string(),
            },
            options: OptionsConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&make_test_config()).is_ok());
    }

    #[test]
    fn test_missing_base_url() {
        let mut config = make_test_config();
        config.server.base_url = String::new();
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let mut config = make_test_config();
        config.server.base_url = "ftp://cloud.example.com".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_missing_token() {
        let mut config = make_test_config();
        config.server.auth_token = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_pacing_delay_bounds() {
        let mut config = make_test_config();
        config.options.pacing_delay_ms = MAX_PACING_DELAY_MS + 1;
        assert!(validate_config(&config).is_err());

        config.options.pacing_delay_ms = MAX_PACING_DELAY_MS;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_valid_remote_paths() {
        assert!(validate_remote_paths(&["/Photos/trip.jpg"]).is_ok());
        assert!(validate_remote_paths(&["notes.txt", "/a/b/c"]).is_ok());
    }

    #[test]
    fn test_invalid_remote_paths() {
        assert!(validate_remote_paths(&[""]).is_err());
        assert!(validate_remote_paths(&["//double"]).is_err());
        assert!(validate_remote_paths(&["/a/../b"]).is_err());
        assert!(validate_remote_paths(&["/./a"]).is_err());
    }
}
