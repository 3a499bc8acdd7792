//! Static airport catalog and its on-disk cache
//!
//! The catalog is a JSON array of airport records. It is cached on disk and
//! refreshed over HTTP once the cached copy is older than the configured age.
//! A stale copy is still preferred to no copy at all.

use crate::config::CatalogConfig;
use crate::error::FlightWxError;
use crate::models::Airport;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// Label used in errors when the catalog itself is unavailable
const CATALOG_SOURCE: &str = "airport catalog";

/// In-memory airport catalog
#[derive(Debug, Clone, Default)]
pub struct AirportCatalog {
    airports: Vec<Airport>,
}

impl AirportCatalog {
    #[must_use]
    pub fn new(airports: Vec<Airport>) -> Self {
        Self { airports }
    }

    /// Decode the JSON array form
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let airports: Vec<Airport> = serde_json::from_str(json)
            .map_err(|e| FlightWxError::catalog(format!("failed to decode catalog: {e}")))?;
        debug!("Decoded {} airport records", airports.len());
        Ok(Self { airports })
    }

    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Case-insensitive lookup by ICAO identifier
    #[must_use]
    pub fn find(&self, icao: &str) -> Option<&Airport> {
        self.airports
            .iter()
            .find(|airport| airport.icao.eq_ignore_ascii_case(icao))
    }
}

/// Loads the catalog from its cache file, refreshing it when too old
pub struct CatalogStore {
    path: PathBuf,
    url: String,
    max_age: Duration,
    timeout: Duration,
}

impl CatalogStore {
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            path: PathBuf::from(&config.path),
            url: config.url.clone(),
            max_age: Duration::from_secs(u64::from(config.max_age_hours) * 3600),
            timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the cached copy is missing or older than the configured age
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        let modified = std::fs::metadata(&self.path).and_then(|meta| meta.modified());
        match modified {
            Ok(modified) => SystemTime::now()
                .duration_since(modified)
                .map_or(false, |age| age > self.max_age),
            Err(_) => true,
        }
    }

    /// Load the catalog, downloading a fresh copy if the cache is stale.
    pub fn load(&self) -> crate::Result<AirportCatalog> {
        if self.needs_refresh() {
            match self.refresh() {
                Ok(catalog) => return Ok(catalog),
                Err(e) if self.path.exists() => {
                    warn!("Catalog refresh failed, using stale copy: {}", e);
                }
                Err(e) => return Err(e),
            }
        }

        self.read_cached()
    }

    fn read_cached(&self) -> crate::Result<AirportCatalog> {
        debug!("Reading cached catalog from {}", self.path.display());
        let contents = std::fs::read_to_string(&self.path)?;
        AirportCatalog::from_json(&contents)
    }

    fn refresh(&self) -> crate::Result<AirportCatalog> {
        info!("Downloading airport catalog from {}", self.url);

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| FlightWxError::fetch_unavailable(CATALOG_SOURCE, e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| FlightWxError::fetch_unavailable(CATALOG_SOURCE, e.to_string()))?;

        let body = response
            .text()
            .map_err(|e| FlightWxError::fetch_unavailable(CATALOG_SOURCE, e.to_string()))?;

        // decode before writing so a bad download never replaces a good cache
        let catalog = AirportCatalog::from_json(&body)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, body)?;
        info!("Cached {} airports at {}", catalog.len(), self.path.display());

        Ok(catalog)
    }
}
