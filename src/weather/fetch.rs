//! METAR report acquisition

use crate::config::WeatherConfig;
use crate::error::FlightWxError;
use crate::models::is_icao_code;
use std::time::Duration;
use tracing::debug;

/// Anything that can deliver the latest raw report for a station
pub trait ReportSource {
    /// Latest raw METAR line for `icao`.
    ///
    /// # Errors
    ///
    /// `FetchUnavailable` when there is no report to be had.
    fn fetch(&self, icao: &str) -> crate::Result<String>;
}

/// Check that `icao` looks like a station identifier and upper-case it
pub fn validate_icao(icao: &str) -> crate::Result<String> {
    let icao = icao.trim();
    if !is_icao_code(icao) {
        return Err(FlightWxError::validation(format!(
            "'{icao}' is not a four-character ICAO code"
        )));
    }
    Ok(icao.to_ascii_uppercase())
}

/// Pick the report out of a station file: the last non-empty line
#[must_use]
pub fn report_line(body: &str) -> Option<&str> {
    body.lines().map(str::trim).filter(|line| !line.is_empty()).last()
}

/// Blocking HTTP client for per-station METAR text files
pub struct MetarClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl MetarClient {
    pub fn new(config: &WeatherConfig) -> crate::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(|e| FlightWxError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn station_url(&self, icao: &str) -> String {
        format!("{}/{}.TXT", self.base_url, icao)
    }
}

impl ReportSource for MetarClient {
    #[tracing::instrument(name = "fetch_metar", level = "debug", skip(self))]
    fn fetch(&self, icao: &str) -> crate::Result<String> {
        let icao = validate_icao(icao)?;
        let url = self.station_url(&icao);
        debug!("GET {}", url);

        let unavailable = |e: reqwest::Error| FlightWxError::fetch_unavailable(&icao, e.to_string());

        let body = self
            .client
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(unavailable)?;

        report_line(&body)
            .map(str::to_string)
            .ok_or_else(|| FlightWxError::fetch_unavailable(&icao, "empty report"))
    }
}
