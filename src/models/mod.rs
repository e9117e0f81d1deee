// Model exports
pub mod domain;
pub mod forecast;
pub mod requests;
pub mod responses;

pub use domain::{ParkingRecord, ParkingFeedResult, ParkingQueryFilters, SortKey, SortOrder, WeatherType, WeatherSnapshot};
pub use forecast::{ForecastPayload, HourForecast, DayForecast};
pub use requests::{ParkingQueryParams, WeatherQueryParams};
pub use responses::{HealthResponse, ErrorResponse};
