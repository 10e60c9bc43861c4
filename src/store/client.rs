//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Status classification into `LookupError`
//! - JSON and text body helpers
//!
//! Exactly one request is sent per call. Retrying is left to the caller.

use crate::error::LookupError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("storecheck/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, LookupError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, LookupError> {
        Self::with_config(timeout, DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                LookupError::network("", "HTTP client", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Perform a GET request and reject non-success statuses
    async fn get(
        &self,
        url: &str,
        app_id: &str,
        store: &str,
    ) -> Result<reqwest::Response, LookupError> {
        debug!(%url, %store, "sending store lookup");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::timeout(app_id, store)
            } else {
                LookupError::network(app_id, store, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "store returned non-success status");
            return Err(LookupError::http_status(app_id, store, status.as_u16()));
        }

        Ok(response)
    }

    /// Perform a GET request and decode a JSON body
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        app_id: &str,
        store: &str,
    ) -> Result<T, LookupError> {
        let response = self.get(url, app_id, store).await?;

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::timeout(app_id, store)
            } else {
                LookupError::invalid_response(app_id, store, format!("failed to parse JSON: {}", e))
            }
        })
    }

    /// Perform a GET request and return the raw body
    pub async fn fetch_text(
        &self,
        url: &str,
        app_id: &str,
        store: &str,
    ) -> Result<String, LookupError> {
        let response = self.get(url, app_id, store).await?;

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::timeout(app_id, store)
            } else {
                LookupError::network(app_id, store, format!("failed to read body: {}", e))
            }
        })
    }
}
