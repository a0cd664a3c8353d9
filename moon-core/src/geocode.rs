use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::MoonError,
    model::{Coordinates, LocationQuery},
};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("moon-cli/", env!("CARGO_PKG_VERSION"));

/// Address-to-coordinates lookup backed by Nominatim (OpenStreetMap).
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: Client,
}

impl NominatimGeocoder {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client for Nominatim")?;

        Ok(Self { http })
    }

    /// Resolve a city/state pair to coordinates.
    ///
    /// An empty result set means the place does not exist as far as the
    /// geocoder is concerned and maps to [`MoonError::LocationNotFound`];
    /// it is not retried or auto-corrected.
    pub async fn geocode(&self, location: &LocationQuery) -> Result<Coordinates, MoonError> {
        let query = location.as_query();
        debug!("Geocoding {query:?} via Nominatim");

        let res = self
            .http
            .get(NOMINATIM_URL)
            .query(&[("q", query.as_str()), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|source| MoonError::Transport { service: "Nominatim", source })?;

        let body = res
            .text()
            .await
            .map_err(|source| MoonError::Transport { service: "Nominatim", source })?;

        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| MoonError::MalformedResponse {
                service: "Nominatim",
                detail: e.to_string(),
            })?;

        let coords = coordinates_from(&places, query)?;
        debug!(
            "Resolved location to ({}, {})",
            coords.latitude, coords.longitude
        );

        Ok(coords)
    }
}

/// Pick the first (best-ranked) hit; an empty result set means the place
/// is unknown to the geocoder.
fn coordinates_from(places: &[NominatimPlace], query: String) -> Result<Coordinates, MoonError> {
    let Some(place) = places.first() else {
        return Err(MoonError::LocationNotFound { query });
    };

    place.coordinates()
}

/// One search hit. Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn coordinates(&self) -> Result<Coordinates, MoonError> {
        let latitude = parse_degrees(&self.lat)?;
        let longitude = parse_degrees(&self.lon)?;
        Ok(Coordinates { latitude, longitude })
    }
}

fn parse_degrees(raw: &str) -> Result<f64, MoonError> {
    raw.parse().map_err(|_| MoonError::MalformedResponse {
        service: "Nominatim",
        detail: format!("expected decimal degrees, got {raw:?}"),
    })
}
