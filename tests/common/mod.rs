#![allow(dead_code)]

use clap::Parser;
use serde_json::{Value, json};
use weather_accurate::cli::Cli;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Open-Meteo style payload: 48 hours from 2026-02-12T00:00, 7 days, IST offset.
pub fn forecast_body(weather_code: u8) -> Value {
    let hours: Vec<String> = (0..48)
        .map(|idx| format!("2026-02-{:02}T{:02}:00", 12 + idx / 24, idx % 24))
        .collect();
    let temps: Vec<Value> = (0..48)
        .map(|idx| {
            if idx == 5 {
                Value::Null
            } else {
                json!(4.0 + f64::from(idx) * 0.25)
            }
        })
        .collect();
    let days: Vec<String> = (0..7).map(|idx| format!("2026-02-{:02}", 12 + idx)).collect();

    json!({
        "utc_offset_seconds": 19800,
        "current": {
            "temperature_2m": 7.4,
            "relative_humidity_2m": 81,
            "apparent_temperature": 5.1,
            "weather_code": weather_code,
            "wind_speed_10m": 9.7,
            "wind_direction_10m": 250
        },
        "hourly": {
            "time": hours,
            "temperature_2m": temps,
            "weather_code": vec![weather_code; 48]
        },
        "daily": {
            "time": days,
            "weather_code": vec![weather_code; 7],
            "temperature_2m_max": [9.0, 10.5, 8.0, 7.5, 11.0, 12.0, 9.5],
            "temperature_2m_min": [1.0, 2.0, 0.5, -1.0, 3.0, 4.0, 2.5],
            "precipitation_sum": [0.0, 3.2, null, 0.0, 1.1, 0.0, 0.4]
        }
    })
}

pub fn geocode_body(names: &[(&str, &str)]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(idx, (name, country))| {
            json!({
                "name": name,
                "latitude": 10.0 + idx as f64,
                "longitude": 20.0 + idx as f64,
                "country": country,
                "admin1": null,
                "timezone": "UTC",
                "population": 100_000 - idx * 1_000
            })
        })
        .collect();
    json!({ "results": results })
}

pub async fn mount_forecast(server: &MockServer, weather_code: u8) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(weather_code)))
        .mount(server)
        .await;
}

/// CLI pointed at `server` for every endpoint.
pub fn mock_cli(server: &MockServer, extra: &[&str]) -> Cli {
    let uri = server.uri();
    let mut args = vec![
        "weather-accurate".to_string(),
        "--seed".to_string(),
        "11".to_string(),
        "--forecast-url".to_string(),
        format!("{uri}/v1/forecast"),
        "--geocode-url".to_string(),
        format!("{uri}/v1/search"),
        "--geoip-url".to_string(),
        format!("{uri}/json/"),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    Cli::parse_from(args)
}
