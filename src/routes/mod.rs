// Route exports
pub mod parking;
pub mod weather;

use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{ParkingFeedClient, WeatherClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub parking: Arc<ParkingFeedClient>,
    pub weather: Arc<WeatherClient>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .configure(parking::configure)
                .configure(weather::configure),
        );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Turn query string errors into a JSON 400
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}
