#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherCategory {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunderstorm,
}

/// Maps a WMO weather code to an animation category.
///
/// Fog is drawn as cloud cover; codes outside the table fall back to clear sky.
#[must_use]
pub fn weather_code_to_category(code: u8) -> WeatherCategory {
    match code {
        2 | 3 | 45 | 48 => WeatherCategory::Cloudy,
        51..=57 | 61..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 | 85 | 86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Thunderstorm,
        _ => WeatherCategory::Clear,
    }
}

const WEATHER_LABELS: &[(u8, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow"),
    (73, "Moderate snow"),
    (75, "Heavy snow"),
    (77, "Snow grains"),
    (80, "Rain showers"),
    (81, "Rain showers"),
    (82, "Violent showers"),
    (85, "Snow showers"),
    (86, "Snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm hail"),
    (99, "Thunderstorm heavy hail"),
];

#[must_use]
pub fn weather_label(code: Option<u8>) -> &'static str {
    code.and_then(|code| {
        WEATHER_LABELS
            .iter()
            .find_map(|(candidate, label)| (*candidate == code).then_some(*label))
    })
    .unwrap_or("—")
}

#[must_use]
pub fn weather_icon(code: Option<u8>) -> &'static str {
    match code {
        None => "?",
        Some(0) => "☀",
        Some(1) => "🌤",
        Some(2) => "⛅",
        Some(45 | 48) => "░",
        Some(code) => match weather_code_to_category(code) {
            WeatherCategory::Cloudy => "☁",
            WeatherCategory::Rain => "☂",
            WeatherCategory::Snow => "❄",
            WeatherCategory::Thunderstorm => "⚡",
            WeatherCategory::Clear => "?",
        },
    }
}
