use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized state of one parking garage taken from the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingRecord {
    pub name: String,
    pub status: String,
    pub available_spots: u32,
    pub update_time: DateTime<Utc>,
    pub fetch_time: DateTime<Utc>,
}

/// All records produced by one fetch of the parking feed
///
/// Every record shares the same `fetch_time`, which is also the `timestamp`
/// of the result. A failed fetch yields an empty result rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingFeedResult {
    pub data: Vec<ParkingRecord>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

impl ParkingFeedResult {
    pub fn new(data: Vec<ParkingRecord>, timestamp: DateTime<Utc>) -> Self {
        let count = data.len();
        Self { data, count, timestamp }
    }

    pub fn empty(timestamp: DateTime<Utc>) -> Self {
        Self::new(Vec::new(), timestamp)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Query-time constraints over parking records; `None` means unconstrained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkingQueryFilters {
    /// Case-insensitive substring of the garage name
    pub name: Option<String>,
    /// Case-insensitive exact status
    pub status: Option<String>,
    pub min_spots: Option<i64>,
    pub max_spots: Option<i64>,
}

/// Field a parking query can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    AvailableSpots,
}

impl SortKey {
    /// Unknown keys are not an error, they just disable sorting
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "available_spots" => Some(SortKey::AvailableSpots),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only an explicit "desc" reverses the order
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Coarse weather category derived from a provider symbol code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherType {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Fog,
}

impl WeatherType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherType::Clear => "clear",
            WeatherType::PartlyCloudy => "partly-cloudy",
            WeatherType::Cloudy => "cloudy",
            WeatherType::Rain => "rain",
            WeatherType::Fog => "fog",
        }
    }
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current weather at a location, taken from one forecast bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature: f64,
    pub weather_type: WeatherType,
    /// ISO-8601 timestamp of the bucket the values were taken from
    pub time: String,
}
