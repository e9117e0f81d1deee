use crate::core::{normalize::parse_feed, Clock};
use crate::models::ParkingFeedResult;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that abort a whole parking feed fetch
#[derive(Debug, Error)]
pub enum ParkingFeedError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Feed returned status {0}")]
    Status(StatusCode),

    #[error("Feed body is not UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Invalid feed document: {0}")]
    InvalidDocument(#[from] roxmltree::Error),
}

/// Parking availability feed client
///
/// Fetches the PLS RSS feed and normalizes its items into parking records.
/// [`ParkingFeedClient::fetch`] never fails: any fetch or document error is
/// logged and turned into an empty result.
#[derive(Debug)]
pub struct ParkingFeedClient {
    feed_url: String,
    client: Client,
    clock: Arc<dyn Clock>,
}

impl ParkingFeedClient {
    /// Create a new feed client
    pub fn new(
        feed_url: String,
        timeout: Duration,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ParkingFeedError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            feed_url,
            client,
            clock,
        })
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch and normalize the feed, reporting why it failed
    pub async fn try_fetch(&self) -> Result<ParkingFeedResult, ParkingFeedError> {
        let fetch_time = self.clock.now();

        tracing::debug!("Fetching parking feed from: {}", self.feed_url);

        let response = self.client.get(&self.feed_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ParkingFeedError::Status(status));
        }

        // The XML declaration governs the encoding, not the Content-Type charset
        let body = response.bytes().await?;
        let records = parse_feed(std::str::from_utf8(&body)?, fetch_time)?;

        tracing::debug!("Parsed {} parking records", records.len());

        Ok(ParkingFeedResult::new(records, fetch_time))
    }

    /// Fetch and normalize the feed, returning an empty result on failure
    pub async fn fetch(&self) -> ParkingFeedResult {
        match self.try_fetch().await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Failed to fetch parking feed from {}: {}", self.feed_url, e);
                ParkingFeedResult::empty(self.clock.now())
            }
        }
    }
}
