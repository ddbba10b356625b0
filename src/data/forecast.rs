use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use super::DataError;
use crate::domain::weather::{
    CurrentConditions, DailyForecast, ForecastBundle, HourlyForecast, Location, parse_date,
    parse_datetime,
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,wind_direction_10m,apparent_temperature";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code,precipitation_sum";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DataError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            base_url: base_url.into(),
        })
    }

    pub async fn fetch(&self, location: Location) -> Result<ForecastBundle, DataError> {
        tracing::info!(
            place = %location.name,
            latitude = location.latitude,
            longitude = location.longitude,
            "fetching forecast"
        );
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "forecast request rejected");
            return Err(DataError::WeatherUnavailable(status.as_u16()));
        }

        let payload: ForecastResponse = response.json().await.map_err(DataError::parse)?;
        Ok(bundle_from_payload(location, payload))
    }
}

fn bundle_from_payload(location: Location, payload: ForecastResponse) -> ForecastBundle {
    let current = CurrentConditions {
        temperature_2m_c: payload.current.temperature_2m,
        relative_humidity_2m: payload.current.relative_humidity_2m.unwrap_or_default(),
        apparent_temperature_c: payload.current.apparent_temperature,
        weather_code: payload.current.weather_code,
        wind_speed_10m: payload.current.wind_speed_10m.unwrap_or_default(),
        wind_direction_10m: payload.current.wind_direction_10m.unwrap_or_default(),
    };

    ForecastBundle {
        location,
        current,
        hourly: parse_hourly(&payload.hourly),
        daily: parse_daily(&payload.daily),
        utc_offset_seconds: payload.utc_offset_seconds,
        fetched_at: Utc::now(),
    }
}

fn parse_hourly(hourly: &HourlyBlock) -> Vec<HourlyForecast> {
    let mut out = Vec::new();
    for (idx, raw) in hourly.time.iter().enumerate() {
        let Some(time) = parse_datetime(raw) else {
            continue;
        };

        out.push(HourlyForecast {
            time,
            temperature_2m_c: hourly.temperature_2m.get(idx).copied().flatten(),
            weather_code: hourly.weather_code.get(idx).copied().flatten(),
        });
    }
    out
}

fn parse_daily(daily: &DailyBlock) -> Vec<DailyForecast> {
    let mut out = Vec::new();
    for (idx, raw) in daily.time.iter().enumerate() {
        let Some(date) = parse_date(raw) else {
            continue;
        };

        out.push(DailyForecast {
            date,
            weather_code: daily.weather_code.get(idx).copied().flatten(),
            temperature_max_c: daily.temperature_2m_max.get(idx).copied().flatten(),
            temperature_min_c: daily.temperature_2m_min.get(idx).copied().flatten(),
            precipitation_sum_mm: daily.precipitation_sum.get(idx).copied().flatten(),
        });
    }
    out
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    utc_offset_seconds: i32,
    current: CurrentBlock,
    #[serde(default)]
    hourly: HourlyBlock,
    #[serde(default)]
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    temperature_2m: Option<f32>,
    relative_humidity_2m: Option<f32>,
    apparent_temperature: Option<f32>,
    weather_code: Option<u8>,
    wind_speed_10m: Option<f32>,
    wind_direction_10m: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HourlyBlock {
    time: Vec<String>,
    temperature_2m: Vec<Option<f32>>,
    weather_code: Vec<Option<u8>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyBlock {
    time: Vec<String>,
    weather_code: Vec<Option<u8>>,
    temperature_2m_max: Vec<Option<f32>>,
    temperature_2m_min: Vec<Option<f32>>,
    precipitation_sum: Vec<Option<f32>>,
}
