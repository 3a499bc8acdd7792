//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays free
//! for the JSON the binary prints. `RUST_LOG` takes precedence over the
//! configured level.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Build the level filter: `RUST_LOG` if set, the configured level otherwise
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_for(from_env.as_deref(), config)
}

/// An unparsable override falls back to the configured level
fn filter_for(directives: Option<&str>, config: &LoggingConfig) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(&config.level))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = env_filter(config);

    if config.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    fn config(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            ..LoggingConfig::default()
        }
    }

    #[test]
    fn test_configured_level_without_override() {
        let filter = filter_for(None, &config("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_override_takes_precedence() {
        let filter = filter_for(Some("warn"), &config("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_unparsable_override_falls_back() {
        let filter = filter_for(Some("flightwx=loudest"), &config("error"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
