/// Failures from the weather, geocoding and IP-location services.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Weather service unavailable ({0})")]
    WeatherUnavailable(u16),
    #[error("Search service unavailable ({0})")]
    SearchUnavailable(u16),
    #[error("No place found for \"{0}\"")]
    PlaceNotFound(String),
    #[error("Location information unavailable")]
    LocationUnavailable,
    #[error("Location request timed out")]
    LocationTimeout,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DataError {
    pub(crate) fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }
}
