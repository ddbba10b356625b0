use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use super::Units;

#[must_use]
pub fn convert_temp(celsius: f32, units: Units) -> f32 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => celsius * 1.8 + 32.0,
    }
}

#[must_use]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// 12-hour clock label: "12 AM", "1 AM", ..., "12 PM", "11 PM".
#[must_use]
pub fn hour_label(time: NaiveDateTime) -> String {
    match time.hour() {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        hour @ 13..=23 => format!("{} PM", hour - 12),
        hour => format!("{hour} AM"),
    }
}

/// "Today" for the first row, the full weekday name otherwise.
#[must_use]
pub fn weekday_label(date: NaiveDate, index: usize) -> &'static str {
    if index == 0 {
        return "Today";
    }
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
