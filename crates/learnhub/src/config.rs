//! Configuration management for learnhub.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "learnhub";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "LEARNHUB_";

/// Upper bound for the simulated catalog latency.
const MAX_LATENCY_MS: u64 = 60_000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `LEARNHUB_`, sections split by `__`,
///    e.g. `LEARNHUB_SERVER__PORT=8080`)
/// 2. TOML config file at `~/.config/learnhub/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Course catalog configuration.
    pub catalog: CatalogConfig,
    /// Feedback collector configuration.
    pub feedback: FeedbackConfig,
    /// User resource configuration.
    pub users: UsersConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind. 0 picks an ephemeral port.
    pub port: u16,
    /// How long browsers may cache CORS preflight responses.
    pub cors_max_age_secs: u64,
}

/// Course catalog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Simulated network latency before the catalog is returned.
    pub latency_ms: u64,
}

/// Feedback collector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Name recorded when a submission omits the name.
    pub anonymous_name: String,
}

/// User resource configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// Start with the three demo users.
    pub seed_defaults: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_max_age_secs: 60 * 60,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { latency_ms: 300 }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            anonymous_name: crate::feedback::ANONYMOUS.to_string(),
        }
    }
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            seed_defaults: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "server.host must not be empty".to_string(),
            });
        }

        if self.catalog.latency_ms > MAX_LATENCY_MS {
            return Err(Error::ConfigValidation {
                message: format!(
                    "catalog.latency_ms ({}) cannot be greater than {MAX_LATENCY_MS}",
                    self.catalog.latency_ms
                ),
            });
        }

        if self.feedback.anonymous_name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "feedback.anonymous_name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// The `host:port` address the server binds.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get the simulated catalog latency as a Duration.
    #[must_use]
    pub fn catalog_latency(&self) -> Duration {
        Duration::from_millis(self.catalog.latency_ms)
    }

    /// Get the CORS preflight max age as a Duration.
    #[must_use]
    pub fn cors_max_age(&self) -> Duration {
        Duration::from_secs(self.server.cors_max_age_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.latency_ms, 300);
        assert_eq!(config.feedback.anonymous_name, "匿名");
        assert!(config.users.seed_defaults);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("server.host"));
    }

    #[test]
    fn test_validate_excessive_latency() {
        let mut config = Config::default();
        config.catalog.latency_ms = MAX_LATENCY_MS + 1;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("latency_ms"));
    }

    #[test]
    fn test_validate_empty_anonymous_name() {
        let mut config = Config::default();
        config.feedback.anonymous_name = String::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("anonymous_name"));
    }

    #[test]
    fn test_bind_address() {
        let mut config = Config::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.catalog_latency(), Duration::from_millis(300));
        assert_eq!(config.cors_max_age(), Duration::from_secs(3600));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("learnhub"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // A missing file falls back to defaults
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml"))).unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.feedback, FeedbackConfig::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "learnhub_config_test_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[catalog]\nlatency_ms = 5\n\n[feedback]\nanonymous_name = \"anonymous\"\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path.clone())).unwrap();
        assert_eq!(config.catalog.latency_ms, 5);
        assert_eq!(config.feedback.anonymous_name, "anonymous");
        assert!(config.users.seed_defaults);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_toml_value() {
        let path = std::env::temp_dir().join(format!(
            "learnhub_config_invalid_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[catalog]\nlatency_ms = 999999\n").unwrap();

        let result = Config::load_from(Some(path.clone()));
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_server_config_deserialize() {
        let json = r#"{"port": 8080}"#;
        let server: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(server.port, 8080);
        assert_eq!(server.host, "127.0.0.1");
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("latency_ms"));
        assert!(json.contains("anonymous_name"));
    }
}
