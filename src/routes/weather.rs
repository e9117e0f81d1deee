use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, WeatherQueryParams};
use crate::routes::AppState;

/// Configure all weather routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/weather", web::get().to(current_weather));
}

/// Current weather
///
/// GET /api/weather?lat={lat}&lon={lon}
///
/// Missing coordinates fall back to the configured reference location.
/// Upstream failures are reported as 502 with the cause in `message`.
async fn current_weather(
    state: web::Data<AppState>,
    query: web::Query<WeatherQueryParams>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let default_location = state.weather.default_location();
    let latitude = query.lat.unwrap_or(default_location.latitude);
    let longitude = query.lon.unwrap_or(default_location.longitude);

    tracing::info!("Resolving weather for {},{}", latitude, longitude);

    match state.weather.resolve(latitude, longitude).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => {
            tracing::error!("Failed to resolve weather for {},{}: {}", latitude, longitude, e);
            HttpResponse::BadGateway().json(ErrorResponse {
                error: "Weather unavailable".to_string(),
                message: e.to_string(),
                status_code: 502,
            })
        }
    }
}
