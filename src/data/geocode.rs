use std::{
    num::NonZeroUsize,
    sync::{Arc, Mutex},
    time::Duration,
};

use lru::LruCache;
use reqwest::Client;
use serde::Deserialize;

use super::DataError;
use crate::domain::weather::Location;

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

const RESULT_COUNT: &str = "5";
const CACHE_ENTRIES: NonZeroUsize = NonZeroUsize::new(64).unwrap();

/// Place search with a shared LRU of recent queries.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    country_code: Option<String>,
    cache: Arc<Mutex<LruCache<String, Vec<Location>>>>,
}

impl GeocodeClient {
    pub fn with_base_url(
        base_url: impl Into<String>,
        country_code: Option<String>,
    ) -> Result<Self, DataError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(8)).build()?,
            base_url: base_url.into(),
            country_code,
            cache: Arc::new(Mutex::new(LruCache::new(CACHE_ENTRIES))),
        })
    }

    /// Up to five places matching `query`, in service order.
    pub async fn search(&self, query: &str) -> Result<Vec<Location>, DataError> {
        let key = normalize(query);
        if let Some(hit) = self.cached(&key) {
            tracing::debug!(query = %key, "geocode cache hit");
            return Ok(hit);
        }

        let results = self.request(query).await?;
        let locations: Vec<Location> = results
            .into_iter()
            .map(GeocodeResult::into_location)
            .collect();
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(key, locations.clone());
        }
        Ok(locations)
    }

    /// Best single match for a city given on the command line.
    pub async fn resolve(&self, city: &str) -> Result<Location, DataError> {
        let results = self.request(city).await?;
        rank_locations(results, city, self.country_code.as_deref())
            .into_iter()
            .next()
            .map(|scored| scored.location)
            .ok_or_else(|| DataError::PlaceNotFound(city.to_string()))
    }

    fn cached(&self, key: &str) -> Option<Vec<Location>> {
        self.cache.lock().ok()?.get(key).cloned()
    }

    async fn request(&self, query: &str) -> Result<Vec<GeocodeResult>, DataError> {
        tracing::info!(query, "searching places");
        let mut request = self.client.get(&self.base_url).query(&[
            ("name", query),
            ("count", RESULT_COUNT),
            ("language", "en"),
            ("format", "json"),
        ]);

        if let Some(code) = self.country_code.as_ref() {
            request = request.query(&[("countryCode", code)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "geocoding request rejected");
            return Err(DataError::SearchUnavailable(status.as_u16()));
        }

        let payload: GeocodeResponse = response.json().await.map_err(DataError::parse)?;
        Ok(payload.results.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    country_code: Option<String>,
    admin1: Option<String>,
    timezone: Option<String>,
    population: Option<u64>,
}

impl GeocodeResult {
    fn into_location(self) -> Location {
        Location {
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country,
            admin1: self.admin1,
            timezone: self.timezone,
        }
    }
}

#[derive(Debug, Clone)]
struct ScoredLocation {
    location: Location,
    exact_name_match: bool,
    country_match: bool,
    population: u64,
    api_order: usize,
}

fn rank_locations(
    results: Vec<GeocodeResult>,
    city: &str,
    country_code: Option<&str>,
) -> Vec<ScoredLocation> {
    let normalized_city = normalize(city);

    let mut scored: Vec<ScoredLocation> = results
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let exact_name_match = normalize(&entry.name) == normalized_city;
            let country_match = country_code.is_some_and(|cc| {
                entry
                    .country_code
                    .as_deref()
                    .is_some_and(|country| country.eq_ignore_ascii_case(cc))
            });
            let population = entry.population.unwrap_or_default();

            ScoredLocation {
                location: entry.into_location(),
                exact_name_match,
                country_match,
                population,
                api_order: idx,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.exact_name_match
            .cmp(&a.exact_name_match)
            .then_with(|| b.country_match.cmp(&a.country_match))
            .then_with(|| b.population.cmp(&a.population))
            .then_with(|| a.api_order.cmp(&b.api_order))
    });

    scored
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
