use crate::models::{ParkingRecord, ParkingQueryFilters};

/// Check if a record satisfies every filter that is set
///
/// Name is a case-insensitive substring match, status a case-insensitive
/// exact match, and the spot bounds are inclusive.
#[inline]
pub fn matches_filters(record: &ParkingRecord, filters: &ParkingQueryFilters) -> bool {
    if let Some(name) = &filters.name {
        if !record.name.to_lowercase().contains(&name.to_lowercase()) {
            return false;
        }
    }

    // An empty status is no constraint
    if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
        if record.status.to_lowercase() != status.to_lowercase() {
            return false;
        }
    }

    let spots = i64::from(record.available_spots);

    if let Some(min_spots) = filters.min_spots {
        if spots < min_spots {
            return false;
        }
    }

    if let Some(max_spots) = filters.max_spots {
        if spots > max_spots {
            return false;
        }
    }

    true
}
