use crate::core::{forecast::select_snapshot, Clock, ForecastError};
use crate::models::{ForecastPayload, WeatherSnapshot};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving the current weather
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Request failed: forecast service returned status {0}")]
    Status(StatusCode),

    #[error("Data parsing failed: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("no weather data found")]
    NoData,

    #[error("Data parsing failed: {0}")]
    Forecast(ForecastError),
}

impl From<ForecastError> for WeatherError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::NoData => WeatherError::NoData,
            other => WeatherError::Forecast(other),
        }
    }
}

impl WeatherError {
    /// True when the upstream answered but had nothing to report
    pub fn is_no_data(&self) -> bool {
        matches!(self, WeatherError::NoData)
    }
}

/// Reference location used when the caller gives no coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// SRF Meteo forecast point client
///
/// Resolves a [`WeatherSnapshot`] for a coordinate. Unlike the parking feed,
/// every failure is surfaced to the caller.
#[derive(Debug)]
pub struct WeatherClient {
    base_url: String,
    default_location: Location,
    client: Client,
    clock: Arc<dyn Clock>,
}

impl WeatherClient {
    /// Create a new weather client
    pub fn new(
        base_url: String,
        default_location: Location,
        timeout: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            default_location,
            client,
            clock,
        })
    }

    pub fn default_location(&self) -> Location {
        self.default_location
    }

    /// Forecast point URL, e.g. `{base}/47.3797,8.5342`
    pub fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/{},{}", self.base_url.trim_end_matches('/'), latitude, longitude)
    }

    /// Weather at the configured reference location
    pub async fn resolve_default(&self) -> Result<WeatherSnapshot, WeatherError> {
        let Location { latitude, longitude } = self.default_location;
        self.resolve(latitude, longitude).await
    }

    /// Weather at the given coordinate, from the bucket closest to now
    pub async fn resolve(&self, latitude: f64, longitude: f64) -> Result<WeatherSnapshot, WeatherError> {
        let url = self.forecast_url(latitude, longitude);

        tracing::debug!("Fetching forecast from: {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await?;
        let payload: ForecastPayload = serde_json::from_str(&body)?;

        let now = self.clock.now();
        let snapshot = select_snapshot(&payload, now)?;

        tracing::debug!(
            "Resolved weather at {},{}: {} {}°C ({})",
            latitude,
            longitude,
            snapshot.weather_type,
            snapshot.temperature,
            snapshot.time
        );

        Ok(snapshot)
    }
}
