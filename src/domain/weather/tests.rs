use chrono::{TimeZone, Utc};

use super::*;

fn at(value: &str) -> NaiveDateTime {
    parse_datetime(value).expect("valid timestamp")
}

fn bundle_with_hours(start: NaiveDateTime, hours: i64) -> ForecastBundle {
    ForecastBundle {
        location: Location::kulgam(),
        current: CurrentConditions {
            temperature_2m_c: Some(21.6),
            relative_humidity_2m: 40.0,
            apparent_temperature_c: None,
            weather_code: Some(61),
            wind_speed_10m: 9.0,
            wind_direction_10m: 180.0,
        },
        hourly: (0..hours)
            .map(|offset| HourlyForecast {
                time: start + Duration::hours(offset),
                temperature_2m_c: Some(10.0),
                weather_code: Some(0),
            })
            .collect(),
        daily: Vec::new(),
        utc_offset_seconds: 19_800,
        fetched_at: Utc::now(),
    }
}

#[test]
fn category_table_covers_wmo_groups() {
    assert_eq!(weather_code_to_category(0), WeatherCategory::Clear);
    assert_eq!(weather_code_to_category(1), WeatherCategory::Clear);
    assert_eq!(weather_code_to_category(3), WeatherCategory::Cloudy);
    assert_eq!(weather_code_to_category(48), WeatherCategory::Cloudy);
    assert_eq!(weather_code_to_category(57), WeatherCategory::Rain);
    assert_eq!(weather_code_to_category(82), WeatherCategory::Rain);
    assert_eq!(weather_code_to_category(77), WeatherCategory::Snow);
    assert_eq!(weather_code_to_category(86), WeatherCategory::Snow);
    assert_eq!(weather_code_to_category(96), WeatherCategory::Thunderstorm);
}

#[test]
fn unknown_codes_fall_back_to_clear() {
    for code in [4, 50, 68, 84, 90, 98, 200] {
        assert_eq!(weather_code_to_category(code), WeatherCategory::Clear);
    }
}

#[test]
fn labels_and_icons_tolerate_missing_codes() {
    assert_eq!(weather_label(Some(56)), "Light freezing drizzle");
    assert_eq!(weather_label(Some(4)), "—");
    assert_eq!(weather_label(None), "—");
    assert_eq!(weather_icon(Some(95)), "⚡");
    assert_eq!(weather_icon(None), "?");
}

#[test]
fn fahrenheit_conversion_rounding() {
    assert_eq!(round_temp(convert_temp(0.0, Units::Fahrenheit)), 32);
    assert_eq!(round_temp(convert_temp(20.0, Units::Fahrenheit)), 68);
    assert_eq!(Units::Celsius.toggled(), Units::Fahrenheit);
    assert_eq!(Units::Fahrenheit.symbol(), "°F");
}

#[test]
fn hour_labels_use_twelve_hour_clock() {
    assert_eq!(hour_label(at("2026-02-12T00:00")), "12 AM");
    assert_eq!(hour_label(at("2026-02-12T09:00")), "9 AM");
    assert_eq!(hour_label(at("2026-02-12T12:00")), "12 PM");
    assert_eq!(hour_label(at("2026-02-12T23:00")), "11 PM");
}

#[test]
fn first_daily_row_is_today() {
    let date = parse_date("2026-02-12").expect("valid date");
    assert_eq!(weekday_label(date, 0), "Today");
    assert_eq!(weekday_label(date, 1), "Thursday");
}

#[test]
fn hourly_window_starts_one_hour_back_and_caps_at_24() {
    let bundle = bundle_with_hours(at("2026-02-12T00:00"), 72);
    let window = bundle.hourly_window(at("2026-02-12T10:30"));
    assert_eq!(window.len(), HOURLY_WINDOW);
    assert_eq!(window[0].time, at("2026-02-12T10:00"));

    let tail = bundle.hourly_window(at("2026-02-14T22:00"));
    assert_eq!(tail.len(), 3);
    assert!(bundle.hourly_window(at("2026-03-01T00:00")).is_empty());
}

#[test]
fn local_now_applies_location_offset() {
    let bundle = bundle_with_hours(at("2026-02-12T00:00"), 1);
    let now = Utc.with_ymd_and_hms(2026, 2, 12, 6, 0, 0).single().expect("valid");
    assert_eq!(bundle.local_now(now), at("2026-02-12T11:30"));
}

#[test]
fn feels_like_falls_back_to_air_temperature() {
    let bundle = bundle_with_hours(at("2026-02-12T00:00"), 1);
    assert_eq!(bundle.feels_like(Units::Celsius), Some(22));
    assert_eq!(bundle.current_temp(Units::Fahrenheit), Some(71));
}

#[test]
fn missing_air_temperature_stays_unknown() {
    let mut bundle = bundle_with_hours(at("2026-02-12T00:00"), 1);
    bundle.current.temperature_2m_c = None;
    assert_eq!(bundle.current_temp(Units::Celsius), None);
    assert_eq!(bundle.feels_like(Units::Celsius), None);

    bundle.current.apparent_temperature_c = Some(-3.4);
    assert_eq!(bundle.feels_like(Units::Celsius), Some(-3));
}

#[test]
fn location_display_joins_known_parts() {
    assert_eq!(Location::kulgam().display_name(), "Kulgam, India");
    assert_eq!(Location::from_coords(1.0, 2.5).display_name(), "1.0000, 2.5000");
}
