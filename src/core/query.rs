use crate::core::filters::matches_filters;
use crate::models::{ParkingRecord, ParkingQueryFilters, SortKey, SortOrder};

/// Filter-then-sort pipeline over normalized parking records
///
/// # Pipeline Stages
/// 1. Filtering (name, status, min/max spots; all ANDed)
/// 2. Optional stable sort by name or available spots
///
/// The query has no opinion on status; callers that only want open garages
/// put that into the filters themselves.
#[derive(Debug, Clone, Default)]
pub struct ParkingQuery {
    filters: ParkingQueryFilters,
    sort_key: Option<SortKey>,
    sort_order: SortOrder,
}

impl ParkingQuery {
    pub fn new(filters: ParkingQueryFilters) -> Self {
        Self {
            filters,
            sort_key: None,
            sort_order: SortOrder::Asc,
        }
    }

    pub fn sorted_by(mut self, sort_key: Option<SortKey>, sort_order: SortOrder) -> Self {
        self.sort_key = sort_key;
        self.sort_order = sort_order;
        self
    }

    /// Run the query
    ///
    /// # Arguments
    /// * `records` - Records in feed order
    ///
    /// # Returns
    /// The matching records, in feed order unless a sort key was requested
    pub fn apply(&self, records: Vec<ParkingRecord>) -> Vec<ParkingRecord> {
        let mut matching: Vec<ParkingRecord> = records
            .into_iter()
            .filter(|record| matches_filters(record, &self.filters))
            .collect();

        if let Some(sort_key) = self.sort_key {
            sort_records(&mut matching, sort_key, self.sort_order);
        }

        matching
    }
}

/// Filter and sort records in one call
pub fn query_parking(
    records: Vec<ParkingRecord>,
    filters: &ParkingQueryFilters,
    sort_key: Option<SortKey>,
    sort_order: SortOrder,
) -> Vec<ParkingRecord> {
    ParkingQuery::new(filters.clone())
        .sorted_by(sort_key, sort_order)
        .apply(records)
}

/// Stable sort; equal keys keep their relative order in both directions
pub fn sort_records(records: &mut [ParkingRecord], sort_key: SortKey, sort_order: SortOrder) {
    match (sort_key, sort_order) {
        (SortKey::Name, SortOrder::Asc) => records.sort_by(|a, b| a.name.cmp(&b.name)),
        (SortKey::Name, SortOrder::Desc) => records.sort_by(|a, b| b.name.cmp(&a.name)),
        (SortKey::AvailableSpots, SortOrder::Asc) => {
            records.sort_by(|a, b| a.available_spots.cmp(&b.available_spots))
        }
        (SortKey::AvailableSpots, SortOrder::Desc) => {
            records.sort_by(|a, b| b.available_spots.cmp(&a.available_spots))
        }
    }
}
