//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::query::DEFAULT_API_BASE;
use crate::view::{DashboardOptions, FetchStrategy};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub dashboard: DashboardOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load the explicit path if given, else the first default location
    /// that exists, else environment-only defaults.
    ///
    /// An explicit path that fails to load is an error; a broken file in a
    /// default location is skipped with a warning.
    pub fn load_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_with_env(path)?;
            tracing::info!("Loaded config from {:?}", path);
            return Ok(config);
        }

        for path in default_config_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            request_timeout_ms: self.api.request_timeout_secs.saturating_mul(1000),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; unparseable values are ignored
    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATA_NERD_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("DATA_NERD_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.api.request_timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid DATA_NERD_TIMEOUT_SECS: {}", timeout),
            }
        }

        if let Some(strategy) = lookup("DATA_NERD_FETCH_STRATEGY") {
            match strategy.parse::<FetchStrategy>() {
                Ok(strategy) => self.dashboard.fetch_strategy = strategy,
                Err(e) => tracing::warn!("Ignoring DATA_NERD_FETCH_STRATEGY: {}", e),
            }
        }

        if let Some(level) = lookup("DATA_NERD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("DATA_NERD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("data-nerd").join("config.toml"));
    }
    paths.push(PathBuf::from("./config.toml"));
    paths
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Data Nerd Configuration
#
# Environment variables override these settings:
# - DATA_NERD_API_URL
# - DATA_NERD_TIMEOUT_SECS
# - DATA_NERD_FETCH_STRATEGY
# - DATA_NERD_LOG_LEVEL
# - DATA_NERD_LOG_FORMAT

[api]
# Analytics API base URL
base_url = "https://data-nerd-api.onrender.com"

# Request timeout in seconds (the hosted API can take a while to wake up)
request_timeout_secs = 30

[dashboard]
# combined: load skills and trends together behind a spinner
# independent: load each on its own, trends only once
fetch_strategy = "combined"

# Show the full-page spinner while a combined load is in flight
show_loading_spinner = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://data-nerd-api.onrender.com");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.dashboard.fetch_strategy, FetchStrategy::Combined);
        assert!(config.dashboard.show_loading_spinner);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.api.base_url, defaults.api.base_url);
        assert_eq!(config.api.request_timeout_secs, defaults.api.request_timeout_secs);
        assert_eq!(config.dashboard, defaults.dashboard);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "http://localhost:8000"

[dashboard]
fetch_strategy = "independent"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.dashboard.fetch_strategy, FetchStrategy::Independent);
        assert!(config.dashboard.show_loading_spinner);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_path_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_default(Some(&dir.path().join("missing.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("DATA_NERD_API_URL", "http://127.0.0.1:9000"),
            ("DATA_NERD_TIMEOUT_SECS", "5"),
            ("DATA_NERD_FETCH_STRATEGY", "independent"),
            ("DATA_NERD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides_from(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.dashboard.fetch_strategy, FetchStrategy::Independent);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides_from(|key| match key {
            "DATA_NERD_TIMEOUT_SECS" => Some("soon".to_string()),
            "DATA_NERD_FETCH_STRATEGY" => Some("sideways".to_string()),
            _ => None,
        });

        assert_eq!(config.api.request_timeout_secs, 30);
        assert_eq!(config.dashboard.fetch_strategy, FetchStrategy::Combined);
    }

    #[test]
    fn test_client_config() {
        let mut config = Config::default();
        config.api.request_timeout_secs = 12;
        let client = config.client_config();
        assert_eq!(client.base_url, "https://data-nerd-api.onrender.com");
        assert_eq!(client.request_timeout_ms, 12_000);
    }
}
