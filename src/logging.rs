//! Logging setup for the native binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter used when `RUST_LOG` is unset
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("data_nerd={}", config.level.trim().to_lowercase())
}

/// Install the global subscriber; logs go to stderr so stdout stays clean
/// for tables and JSON.
///
/// Calling this twice is harmless: the second install is ignored.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Logging already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let config = LoggingConfig {
            level: " DEBUG ".to_string(),
            format: "pretty".to_string(),
        };
        assert_eq!(default_filter(&config), "data_nerd=debug");
        assert_eq!(default_filter(&LoggingConfig::default()), "data_nerd=info");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let config = LoggingConfig {
            level: "warn".to_string(),
            format: "json".to_string(),
        };
        init_logging(&config);
        init_logging(&LoggingConfig::default());
    }
}
