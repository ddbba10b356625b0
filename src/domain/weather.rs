use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

mod conditions;
mod conversions;

pub use conditions::{WeatherCategory, weather_code_to_category, weather_icon, weather_label};
pub use conversions::{
    convert_temp, hour_label, parse_date, parse_datetime, round_temp, weekday_label,
};

/// Hours of forecast shown in the hourly strip and the chart.
pub const HOURLY_WINDOW: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Celsius => Self::Fahrenheit,
            Self::Fahrenheit => Self::Celsius,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub timezone: Option<String>,
}

impl Location {
    #[must_use]
    pub fn from_coords(lat: f64, lon: f64) -> Self {
        Self {
            name: format!("{lat:.4}, {lon:.4}"),
            latitude: lat,
            longitude: lon,
            country: None,
            admin1: None,
            timezone: None,
        }
    }

    /// Fallback shown when no city, coordinates or IP lookup were requested.
    #[must_use]
    pub fn kulgam() -> Self {
        Self {
            name: "Kulgam".to_string(),
            latitude: 33.6307,
            longitude: 75.0186,
            country: Some("India".to_string()),
            admin1: None,
            timezone: None,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) => format!("{}, {}, {}", self.name, admin, country),
            (None, Some(country)) => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub temperature_2m_c: Option<f32>,
    pub relative_humidity_2m: f32,
    pub apparent_temperature_c: Option<f32>,
    pub weather_code: Option<u8>,
    pub wind_speed_10m: f32,
    pub wind_direction_10m: f32,
}

#[derive(Debug, Clone)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature_2m_c: Option<f32>,
    pub weather_code: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: Option<u8>,
    pub temperature_max_c: Option<f32>,
    pub temperature_min_c: Option<f32>,
    pub precipitation_sum_mm: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct ForecastBundle {
    pub location: Location,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
    pub utc_offset_seconds: i32,
    pub fetched_at: DateTime<Utc>,
}

impl ForecastBundle {
    #[must_use]
    pub fn current_weather_code(&self) -> Option<u8> {
        self.current.weather_code
    }

    #[must_use]
    pub fn current_temp(&self, units: Units) -> Option<i32> {
        self.current
            .temperature_2m_c
            .map(|celsius| round_temp(convert_temp(celsius, units)))
    }

    /// Feels-like temperature, falling back to the air temperature.
    #[must_use]
    pub fn feels_like(&self, units: Units) -> Option<i32> {
        self.current
            .apparent_temperature_c
            .or(self.current.temperature_2m_c)
            .map(|celsius| round_temp(convert_temp(celsius, units)))
    }

    /// Wall-clock time at the forecast location.
    #[must_use]
    pub fn local_now(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.naive_utc() + Duration::seconds(i64::from(self.utc_offset_seconds))
    }

    /// Up to [`HOURLY_WINDOW`] entries starting one hour before `local_now`.
    #[must_use]
    pub fn hourly_window(&self, local_now: NaiveDateTime) -> &[HourlyForecast] {
        let cutoff = local_now - Duration::hours(1);
        let start = self
            .hourly
            .iter()
            .position(|hour| hour.time >= cutoff)
            .unwrap_or(self.hourly.len());
        let end = (start + HOURLY_WINDOW).min(self.hourly.len());
        &self.hourly[start..end]
    }
}

#[cfg(test)]
mod tests;
