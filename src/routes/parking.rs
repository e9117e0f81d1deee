use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::ParkingQuery;
use crate::models::{ErrorResponse, ParkingQueryParams};
use crate::routes::AppState;

/// Configure all parking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/parking", web::get().to(list_parking))
        .route("/parking/raw", web::get().to(raw_feed));
}

/// List open parking garages
///
/// GET /api/parking?name=&min_spots=&max_spots=&sort_by=&sort_order=
///
/// `sort_by` is `name` or `available_spots`; anything else leaves the feed
/// order untouched. `sort_order` is `asc` unless it is exactly `desc`.
/// An unreachable feed produces an empty list, not an error.
async fn list_parking(
    state: web::Data<AppState>,
    query: web::Query<ParkingQueryParams>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for parking query: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let feed = state.parking.fetch().await;
    if feed.is_empty() {
        tracing::warn!("Parking feed returned no records");
    }
    let total = feed.count;

    let parking_query = ParkingQuery::new(query.open_filters())
        .sorted_by(query.sort_key(), query.sort_order());
    let records = parking_query.apply(feed.data);

    tracing::info!("Returning {} of {} parking records", records.len(), total);

    HttpResponse::Ok().json(records)
}

/// Unfiltered feed with its count and fetch timestamp
///
/// GET /api/parking/raw
async fn raw_feed(state: web::Data<AppState>) -> impl Responder {
    let feed = state.parking.fetch().await;

    tracing::debug!("Returning raw parking feed with {} records", feed.count);

    HttpResponse::Ok().json(feed)
}
