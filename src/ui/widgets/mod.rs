pub mod backdrop;
pub mod chart;
pub mod current;
pub mod daily;
pub mod footer;
pub mod hourly;
pub mod search;
mod shared;
