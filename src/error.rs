//! Error types and handling for the `flightwx` crate

use thiserror::Error;

/// Main error type for `flightwx`
///
/// Malformed report fields are deliberately absent here: the METAR parser
/// substitutes defaults instead of failing.
#[derive(Error, Debug)]
pub enum FlightWxError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors (bad ICAO codes, malformed position fixes)
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A collaborator could not deliver a report or catalog
    #[error("Data unavailable for {station}: {message}")]
    FetchUnavailable { station: String, message: String },

    /// No airport in the catalog qualified as a candidate
    #[error("Resolution failure: {message}")]
    ResolutionFailure { message: String },

    /// Airport catalog decoding errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl FlightWxError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new fetch-unavailable error for a station or data source
    pub fn fetch_unavailable<S: Into<String>, M: Into<String>>(station: S, message: M) -> Self {
        Self::FetchUnavailable {
            station: station.into(),
            message: message.into(),
        }
    }

    /// Create a new resolution failure
    pub fn resolution<S: Into<String>>(message: S) -> Self {
        Self::ResolutionFailure {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Whether the caller should fall back to clear weather
    #[must_use]
    pub fn is_fetch_unavailable(&self) -> bool {
        matches!(self, FlightWxError::FetchUnavailable { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FlightWxError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            FlightWxError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            FlightWxError::FetchUnavailable { station, .. } => {
                format!("Fetch failed for {station}, using clear weather.")
            }
            FlightWxError::ResolutionFailure { .. } => {
                "No nearby airport found in the catalog.".to_string()
            }
            FlightWxError::Catalog { .. } => {
                "Airport catalog could not be read. You may need to delete the cached copy."
                    .to_string()
            }
            FlightWxError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for FlightWxError {
    fn from(err: serde_json::Error) -> Self {
        FlightWxError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = FlightWxError::config("missing base url");
        assert!(matches!(config_err, FlightWxError::Config { .. }));

        let fetch_err = FlightWxError::fetch_unavailable("KSFO", "timeout");
        assert!(matches!(fetch_err, FlightWxError::FetchUnavailable { .. }));
        assert!(fetch_err.is_fetch_unavailable());

        let resolution_err = FlightWxError::resolution("empty catalog");
        assert!(matches!(resolution_err, FlightWxError::ResolutionFailure { .. }));
        assert!(!resolution_err.is_fetch_unavailable());
    }

    #[test]
    fn test_user_messages() {
        let fetch_err = FlightWxError::fetch_unavailable("EDDF", "404");
        assert_eq!(
            fetch_err.user_message(),
            "Fetch failed for EDDF, using clear weather."
        );

        let validation_err = FlightWxError::validation("bad icao");
        assert!(validation_err.user_message().contains("bad icao"));

        let resolution_err = FlightWxError::resolution("nothing");
        assert!(resolution_err.user_message().contains("No nearby airport"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FlightWxError = io_err.into();
        assert!(matches!(err, FlightWxError::Io { .. }));
    }

    #[test]
    fn test_json_error_is_validation() {
        let json_err = serde_json::from_str::<Vec<f64>>("{").unwrap_err();
        let err: FlightWxError = json_err.into();
        assert!(matches!(err, FlightWxError::Validation { .. }));
    }
}
