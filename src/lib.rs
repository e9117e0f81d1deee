//! Parking Weather API - aggregation service for Zurich parking and weather
//!
//! This library normalizes the PLS parking availability RSS feed and the SRF
//! Meteo forecast into strict JSON models, and filters/sorts parking data at
//! query time.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{determine_weather_type, extract_name, parse_description, query_parking, Clock, ParkingQuery};
pub use models::{ParkingRecord, ParkingFeedResult, ParkingQueryFilters, SortKey, SortOrder, WeatherSnapshot, WeatherType};
pub use services::{ParkingFeedClient, WeatherClient, WeatherError};
