//! Transit feed HTTP client.
//!
//! Provides async methods for querying the provider's rail departure
//! and bus arrival endpoints. Handles authentication, concurrency
//! limiting, and conversion to domain types.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::{RawDeparture, RouteId, StationId, StopId};

use super::convert::{convert_bus_board, convert_train_board};
use super::error::FeedError;
use super::types::{BusBoard, TrainBoard};

/// Default base URL for the transit API.
const DEFAULT_BASE_URL: &str = "https://api.transit.example.com/v2";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Transit API client.
///
/// Provides methods for querying rail departure boards and bus stop
/// arrivals. Uses a semaphore to limit concurrent requests and avoid
/// rate limiting; all five feeds of a query may be in flight at once.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();

        // The provider signs requests via an "x-apikey" header
        let api_key = HeaderValue::from_str(&config.api_key).map_err(|_| FeedError::ApiError {
            status: 0,
            message: "Invalid API key format".to_string(),
        })?;
        headers.insert("x-apikey", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get upcoming train departures for a station, all directions.
    pub async fn get_train_departures(
        &self,
        station: &StationId,
    ) -> Result<Vec<RawDeparture>, FeedError> {
        let url = format!("{}/rail/stations/{}/departures", self.base_url, station);
        let body = self.fetch(&url, &[]).await?;

        let board: TrainBoard = serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(convert_train_board(&board))
    }

    /// Get upcoming bus departures for one route at one stop.
    pub async fn get_bus_departures(
        &self,
        stop: &StopId,
        route: &RouteId,
    ) -> Result<Vec<RawDeparture>, FeedError> {
        let url = format!("{}/bus/stops/{}/arrivals", self.base_url, stop);
        let body = self
            .fetch(&url, &[("route", route.as_str().to_string())])
            .await?;

        let board: BusBoard = serde_json::from_str(&body).map_err(|e| FeedError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        Ok(convert_bus_board(&board))
    }

    /// Issue one GET under the concurrency limit and return the body.
    async fn fetch(&self, url: &str, query: &[(&str, String)]) -> Result<String, FeedError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FeedError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self.http.get(url).query(query).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FeedError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FeedError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = FeedConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = FeedConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let config = FeedConfig::new("test-key");
        let client = FeedClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn client_rejects_unprintable_key() {
        let config = FeedConfig::new("bad\nkey");
        assert!(FeedClient::new(config).is_err());
    }

    // Integration tests would go here, but require a real API key
    // and would make actual HTTP requests. They should be marked
    // with #[ignore] and run separately.
}
