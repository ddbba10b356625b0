use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use super::DataError;
use crate::domain::weather::Location;

pub const GEOIP_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country_name: Option<String>,
    region: Option<String>,
    timezone: Option<String>,
}

/// Approximate location of this machine from its public IP address.
pub async fn detect_location(url: &str) -> Result<Location, DataError> {
    let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
    let response = client.get(url).send().await.map_err(classify)?;
    if !response.status().is_success() {
        tracing::warn!(status = %response.status(), "ip location rejected");
        return Err(DataError::LocationUnavailable);
    }
    let payload: IpApiResponse = response.json().await.map_err(classify)?;

    let (Some(latitude), Some(longitude)) = (payload.latitude, payload.longitude) else {
        return Err(DataError::LocationUnavailable);
    };
    let name = payload
        .city
        .filter(|city| !city.is_empty())
        .unwrap_or_else(|| Location::from_coords(latitude, longitude).name);
    Ok(Location {
        name,
        latitude,
        longitude,
        country: payload.country_name,
        admin1: payload.region,
        timezone: payload.timezone,
    })
}

fn classify(err: reqwest::Error) -> DataError {
    if err.is_timeout() {
        DataError::LocationTimeout
    } else {
        tracing::warn!(error = %err, "ip location failed");
        DataError::LocationUnavailable
    }
}
