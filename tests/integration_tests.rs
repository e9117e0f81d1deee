// Integration tests for the parking weather API

use actix_web::{test, web, App};
use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server, ServerGuard};
use parking_weather_api::core::{Clock, FixedClock};
use parking_weather_api::models::{ErrorResponse, ParkingFeedResult, ParkingRecord, WeatherSnapshot, WeatherType};
use parking_weather_api::routes::{configure_routes, handle_query_payload_error, AppState};
use parking_weather_api::services::{Location, ParkingFeedClient, WeatherClient, WeatherError};
use std::sync::Arc;
use std::time::Duration;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:dc="http://purl.org/dc/elements/1.1/">
  <channel>
    <title>Parkleitsystem Zürich</title>
    <item>
      <title>Parkhaus Accu / Otto-Schütz-Weg</title>
      <description>open / 172</description>
      <dc:date>2024-05-10T12:05:00Z</dc:date>
    </item>
    <item>
      <title>Parkhaus Zentral / Bahnhofstrasse</title>
      <description>open / 42</description>
      <dc:date>2024-05-10T12:00:00Z</dc:date>
    </item>
    <item>
      <title>Parkhaus Opera / Schillerstrasse 5</title>
      <description>closed / 0</description>
      <dc:date>2024-05-10T11:58:00Z</dc:date>
    </item>
    <item>
      <title>Parkhaus Jelmoli / Steinmühleplatz</title>
      <description>OPEN / 8</description>
      <dc:date>not a date</dc:date>
    </item>
  </channel>
</rss>"#;

const FORECAST: &str = r#"{
  "hours": [
    {"date_time": "2024-05-10T13:00:00+02:00", "TTT_C": 14.0, "symbol_code": 1},
    {"date_time": "2024-05-10T14:00:00+02:00", "TTT_C": 15.5, "symbol_code": -19},
    {"date_time": "2024-05-10T15:00:00+02:00", "TTT_C": 16.0, "symbol_code": 20}
  ],
  "days": [
    {"date_time": "2024-05-10T00:00:00+02:00", "TX_C": 18.0, "TN_C": 7.0, "symbol_code": 3}
  ]
}"#;

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 5, 10, 12, 10, 0).unwrap()))
}

fn parking_client(server: &ServerGuard) -> ParkingFeedClient {
    ParkingFeedClient::new(format!("{}/plsFeed/rss", server.url()), Duration::from_secs(5), clock()).unwrap()
}

fn weather_client(server: &ServerGuard) -> WeatherClient {
    WeatherClient::new(
        format!("{}/meteoapi/forecastpoint", server.url()),
        Location { latitude: 47.3797, longitude: 8.5342 },
        Duration::from_secs(5),
        clock(),
    )
    .unwrap()
}

async fn feed_server(status: usize, body: &str) -> ServerGuard {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/plsFeed/rss")
        .with_status(status)
        .with_header("content-type", "application/rss+xml; charset=utf-8")
        .with_body(body)
        .create_async()
        .await;
    server
}

async fn forecast_server(status: usize, body: &str) -> ServerGuard {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/meteoapi/forecastpoint/".to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
    server
}

fn app_state(parking: &ServerGuard, weather: &ServerGuard) -> AppState {
    AppState {
        parking: Arc::new(parking_client(parking)),
        weather: Arc::new(weather_client(weather)),
    }
}

#[tokio::test]
async fn test_fetch_normalizes_every_item() {
    let server = feed_server(200, FEED).await;

    let result = parking_client(&server).fetch().await;
    let fetch_time = Utc.with_ymd_and_hms(2024, 5, 10, 12, 10, 0).unwrap();

    assert_eq!(result.count, 4);
    assert_eq!(result.timestamp, fetch_time);
    let names: Vec<&str> = result.data.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Parkhaus Accu", "Parkhaus Zentral", "Parkhaus Opera", "Parkhaus Jelmoli"]);
    assert!(result.data.iter().all(|r| r.fetch_time == fetch_time));
    assert_eq!(result.data[3].update_time, fetch_time);
}

#[tokio::test]
async fn test_fetch_fails_closed_on_broken_document() {
    let server = feed_server(200, "<rss><channel><item>").await;

    let result = parking_client(&server).fetch().await;

    assert!(result.data.is_empty());
    assert_eq!(result.count, 0);
}

#[tokio::test]
async fn test_fetch_fails_closed_when_unreachable() {
    let server = Server::new_async().await;
    let url = format!("{}/plsFeed/rss", server.url());
    drop(server);

    let client = ParkingFeedClient::new(url, Duration::from_secs(2), clock()).unwrap();

    assert!(client.try_fetch().await.is_err());
    assert_eq!(client.fetch().await.count, 0);
}

#[tokio::test]
async fn test_resolve_picks_nearest_hour() {
    let server = forecast_server(200, FORECAST).await;

    let snapshot = weather_client(&server).resolve_default().await.unwrap();

    // 12:10Z is closest to 14:00+02:00
    assert_eq!(snapshot.temperature, 15.5);
    assert_eq!(snapshot.weather_type, WeatherType::Cloudy);
    assert_eq!(snapshot.time, "2024-05-10T14:00:00+02:00");
}

#[tokio::test]
async fn test_resolve_reports_http_errors() {
    let server = forecast_server(500, "oops").await;

    let err = weather_client(&server).resolve(46.95, 7.45).await.unwrap_err();

    assert!(matches!(err, WeatherError::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_resolve_reports_missing_data() {
    let server = forecast_server(200, r#"{"hours": [], "days": []}"#).await;

    let err = weather_client(&server).resolve_default().await.unwrap_err();

    assert!(err.is_no_data());
}

#[tokio::test]
async fn test_resolve_reports_invalid_json() {
    let server = forecast_server(200, "<html>").await;

    let err = weather_client(&server).resolve_default().await.unwrap_err();

    assert!(matches!(err, WeatherError::InvalidResponse(_)));
    assert!(err.to_string().starts_with("Data parsing failed"));
}

#[actix_web::test]
async fn test_parking_endpoint_only_lists_open_garages() {
    let parking = feed_server(200, FEED).await;
    let weather = forecast_server(200, FORECAST).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/parking?sort_by=available_spots&sort_order=desc")
        .to_request();
    let records: Vec<ParkingRecord> = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Parkhaus Accu", "Parkhaus Zentral", "Parkhaus Jelmoli"]);
}

#[actix_web::test]
async fn test_parking_endpoint_filters() {
    let parking = feed_server(200, FEED).await;
    let weather = forecast_server(200, FORECAST).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/parking?name=parkhaus&min_spots=10&max_spots=100")
        .to_request();
    let records: Vec<ParkingRecord> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Parkhaus Zentral");
    assert_eq!(records[0].available_spots, 42);
}

#[actix_web::test]
async fn test_parking_endpoint_rejects_bad_query() {
    let parking = feed_server(200, FEED).await;
    let weather = forecast_server(200, FORECAST).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/parking?min_spots=lots").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_query");

    let req = test::TestRequest::get().uri("/api/parking?min_spots=-5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_raw_feed_endpoint() {
    let parking = feed_server(200, FEED).await;
    let weather = forecast_server(200, FORECAST).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/parking/raw").to_request();
    let feed: ParkingFeedResult = test::call_and_read_body_json(&app, req).await;

    assert_eq!(feed.count, 4);
    assert_eq!(feed.data.len(), 4);
}

#[actix_web::test]
async fn test_parking_endpoint_empty_when_feed_down() {
    let parking = feed_server(503, "").await;
    let weather = forecast_server(200, FORECAST).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/parking").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let records: Vec<ParkingRecord> = test::read_body_json(resp).await;
    assert!(records.is_empty());
}

#[actix_web::test]
async fn test_weather_endpoint() {
    let parking = feed_server(200, FEED).await;
    let weather = forecast_server(200, FORECAST).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/weather").to_request();
    let snapshot: WeatherSnapshot = test::call_and_read_body_json(&app, req).await;

    assert_eq!(snapshot.weather_type, WeatherType::Cloudy);
    assert_eq!(snapshot.temperature, 15.5);
}

#[actix_web::test]
async fn test_weather_endpoint_bad_gateway() {
    let parking = feed_server(200, FEED).await;
    let weather = forecast_server(404, "not found").await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(&parking, &weather)))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/weather?lat=47.0&lon=8.0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 502);

    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.status_code, 502);
    assert!(body.message.contains("404"));
}
