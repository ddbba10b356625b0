#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    animation::EngineOptions,
    data::{forecast::FORECAST_URL, geocode::GEOCODE_URL, geoip::GEOIP_URL},
    domain::weather::Units,
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitsArg> for Units {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Celsius => Units::Celsius,
            UnitsArg::Fahrenheit => Units::Fahrenheit,
        }
    }
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-accurate",
    version,
    about = "Weather dashboard with animated rain, snow, clouds, sun and lightning"
)]
pub struct Cli {
    /// City name (default: Kulgam)
    pub city: Option<String>,

    /// Direct latitude (requires --lon)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Direct longitude (requires --lat)
    #[arg(long, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Look up the location from this machine's IP address
    #[arg(long, conflicts_with = "city")]
    pub locate: bool,

    /// Default units
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Disable particle animation
    #[arg(long)]
    pub no_animation: bool,

    /// Disable thunder flash
    #[arg(long)]
    pub no_flash: bool,

    /// Seed for reproducible particle layouts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Geocode bias (ISO2)
    #[arg(long)]
    pub country_code: Option<String>,

    /// Forecast endpoint
    #[arg(long, default_value = FORECAST_URL, hide = true)]
    pub forecast_url: String,

    /// Geocoding endpoint
    #[arg(long, default_value = GEOCODE_URL, hide = true)]
    pub geocode_url: String,

    /// IP geolocation endpoint
    #[arg(long, default_value = GEOIP_URL, hide = true)]
    pub geoip_url: String,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon))
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) =>
            {
                anyhow::bail!("--lat must be within ±90 and --lon within ±180")
            }
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            enabled: !self.no_animation,
            lightning: !self.no_flash,
            seed: self.seed,
        }
    }

    #[must_use]
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}
