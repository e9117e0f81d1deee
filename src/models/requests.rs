use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{ParkingQueryFilters, SortKey, SortOrder};

/// Query string of `GET /api/parking`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ParkingQueryParams {
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub min_spots: Option<i64>,
    #[validate(range(min = 0))]
    pub max_spots: Option<i64>,
    pub sort_by: Option<String>,
    #[serde(default = "default_sort_order")]
    pub sort_order: String,
}

fn default_sort_order() -> String {
    "asc".to_string()
}

impl ParkingQueryParams {
    /// Filters for the public listing, which only ever shows open garages
    pub fn open_filters(&self) -> ParkingQueryFilters {
        ParkingQueryFilters {
            name: self.name.clone(),
            status: Some("open".to_string()),
            min_spots: self.min_spots,
            max_spots: self.max_spots,
        }
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_by.as_deref().and_then(SortKey::parse)
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(&self.sort_order)
    }
}

/// Query string of `GET /api/weather`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct WeatherQueryParams {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
}
