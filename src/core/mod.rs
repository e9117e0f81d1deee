// Core pipeline exports
pub mod clock;
pub mod filters;
pub mod forecast;
pub mod normalize;
pub mod query;
pub mod weather_type;

pub use clock::{Clock, SystemClock, FixedClock};
pub use filters::matches_filters;
pub use forecast::{select_snapshot, ForecastError};
pub use normalize::{extract_name, parse_description, parse_feed, parse_update_time};
pub use query::{query_parking, sort_records, ParkingQuery};
pub use weather_type::determine_weather_type;
