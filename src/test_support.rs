use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use clap::Parser;
use ratatui::buffer::Buffer;

use crate::{
    cli::Cli,
    domain::weather::{CurrentConditions, DailyForecast, ForecastBundle, HourlyForecast, Location},
};

/// Endpoints point at a closed local port so stray requests fail fast.
pub(crate) fn state_test_cli() -> Cli {
    Cli::parse_from([
        "weather-accurate",
        "--no-flash",
        "--seed",
        "7",
        "--forecast-url",
        "http://127.0.0.1:9/v1/forecast",
        "--geocode-url",
        "http://127.0.0.1:9/v1/search",
        "--geoip-url",
        "http://127.0.0.1:9/json",
    ])
}

pub(crate) fn fixture_bundle(weather_code: Option<u8>) -> ForecastBundle {
    let base_time = NaiveDateTime::parse_from_str("2026-02-12T10:00", "%Y-%m-%dT%H:%M")
        .expect("valid time fixture");
    let base_date = NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture");

    ForecastBundle {
        location: Location::kulgam(),
        current: CurrentConditions {
            temperature_2m_c: Some(7.2),
            relative_humidity_2m: 73.0,
            apparent_temperature_c: Some(5.8),
            weather_code,
            wind_speed_10m: 12.0,
            wind_direction_10m: 220.0,
        },
        hourly: (0..48)
            .map(|idx| HourlyForecast {
                time: base_time + Duration::hours(idx),
                temperature_2m_c: Some(5.0 + idx as f32 * 0.5),
                weather_code,
            })
            .collect(),
        daily: (0..7)
            .map(|idx| DailyForecast {
                date: base_date + Duration::days(idx),
                weather_code,
                temperature_max_c: Some(8.0 + idx as f32),
                temperature_min_c: Some(1.0 + idx as f32 * 0.3),
                precipitation_sum_mm: Some(if idx % 2 == 0 { 0.0 } else { 2.5 }),
            })
            .collect(),
        utc_offset_seconds: 19_800,
        fetched_at: Utc::now(),
    }
}

/// Rendered symbols, one line per buffer row.
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
