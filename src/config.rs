//! Configuration management for `flightwx`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::FlightWxError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightWxConfig {
    /// METAR source configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Airport catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// METAR source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL holding one `<ICAO>.TXT` file per station
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Airport catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where to download the catalog from
    #[serde(default = "default_catalog_url")]
    pub url: String,
    /// Cached catalog location
    #[serde(default = "default_catalog_path")]
    pub path: String,
    /// Refresh the cached copy once it is older than this
    #[serde(default = "default_catalog_max_age")]
    pub max_age_hours: u32,
    /// Download timeout in seconds
    #[serde(default = "default_catalog_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://tgftp.nws.noaa.gov/data/observations/metar/stations".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_catalog_url() -> String {
    "https://flightwx.github.io/catalog/airports.json".to_string()
}

fn default_catalog_path() -> String {
    dirs::cache_dir()
        .map(|dir| dir.join("flightwx").join("airports.json"))
        .unwrap_or_else(|| PathBuf::from("airports.json"))
        .to_string_lossy()
        .into_owned()
}

fn default_catalog_max_age() -> u32 {
    // a week
    168
}

fn default_catalog_timeout() -> u32 {
    60
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            path: default_catalog_path(),
            max_age_hours: default_catalog_max_age(),
            timeout_seconds: default_catalog_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl FlightWxConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // FLIGHTWX_WEATHER__BASE_URL=... overrides weather.base_url
        builder = builder.add_source(
            Environment::with_prefix("FLIGHTWX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: FlightWxConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flightwx").join("config.toml"))
    }

    /// Apply default values to empty or zeroed configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.catalog.url.is_empty() {
            self.catalog.url = default_catalog_url();
        }
        if self.catalog.path.is_empty() {
            self.catalog.path = default_catalog_path();
        }
        if self.catalog.max_age_hours == 0 {
            self.catalog.max_age_hours = default_catalog_max_age();
        }
        if self.catalog.timeout_seconds == 0 {
            self.catalog.timeout_seconds = default_catalog_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(
                FlightWxError::config("Weather timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.catalog.timeout_seconds > 300 {
            return Err(
                FlightWxError::config("Catalog timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.catalog.max_age_hours > 8760 {
            return Err(FlightWxError::config(
                "Catalog max age cannot exceed 8760 hours (1 year)",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(FlightWxError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(FlightWxError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Weather base URL", &self.weather.base_url),
            ("Catalog URL", &self.catalog.url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(
                    FlightWxError::config(format!("{name} must be a valid HTTP or HTTPS URL"))
                        .into(),
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlightWxConfig::default();
        assert!(config.weather.base_url.starts_with("https://tgftp.nws.noaa.gov"));
        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.catalog.max_age_hours, 168);
        assert!(config.catalog.path.ends_with("airports.json"));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = FlightWxConfig::default();
        config.logging.level = "verbose".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = FlightWxConfig::default();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_url_scheme() {
        let mut config = FlightWxConfig::default();
        config.catalog.url = "ftp://example.org/airports.json".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Catalog URL"));
    }

    #[test]
    fn test_apply_defaults_fills_zeroed_fields() {
        let mut config = FlightWxConfig::default();
        config.weather.base_url.clear();
        config.catalog.max_age_hours = 0;
        config.logging.format.clear();

        config.apply_defaults();

        assert_eq!(config.weather.base_url, default_weather_base_url());
        assert_eq!(config.catalog.max_age_hours, 168);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "flightwx_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[weather]\ntimeout_seconds = 20\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = FlightWxConfig::load_from_path(Some(path.clone())).unwrap();
        assert_eq!(config.weather.timeout_seconds, 20);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.catalog.max_age_hours, 168);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = FlightWxConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("flightwx"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
