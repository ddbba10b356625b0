pub mod error;
pub mod forecast;
pub mod geocode;
pub mod geoip;

pub use error::DataError;
