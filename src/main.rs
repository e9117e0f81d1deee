use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use parking_weather_api::config::Settings;
use parking_weather_api::core::{Clock, SystemClock};
use parking_weather_api::routes::{self, handle_query_payload_error, AppState};
use parking_weather_api::services::{ParkingFeedClient, WeatherClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting parking weather API...");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let parking = ParkingFeedClient::new(
        settings.parking.feed_url.clone(),
        settings.parking.timeout(),
        clock.clone(),
    )
    .map_err(|e| {
        error!("Failed to create parking feed client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("Parking feed client initialized ({})", parking.feed_url());

    let weather = WeatherClient::new(
        settings.weather.base_url.clone(),
        settings.weather.default_location(),
        settings.weather.timeout(),
        clock,
    )
    .map_err(|e| {
        error!("Failed to create weather client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("Weather client initialized ({})", settings.weather.base_url);

    let app_state = AppState {
        parking: Arc::new(parking),
        weather: Arc::new(weather),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    });

    if let Some(workers) = settings.server.workers {
        server = server.workers(workers);
    }

    server.bind((host, port))?.run().await
}
