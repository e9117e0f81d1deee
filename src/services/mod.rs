// Service exports
pub mod parking;
pub mod weather;

pub use parking::{ParkingFeedClient, ParkingFeedError};
pub use weather::{Location, WeatherClient, WeatherError};
