//! Apple App Store adapter
//!
//! Looks up the published version through the iTunes lookup API.
//! API endpoint: https://itunes.apple.com/lookup?bundleId={bundle_id}

use crate::domain::{LookupResult, Platform};
use crate::error::LookupError;
use crate::store::{HttpClient, StoreAdapter};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// iTunes lookup API base URL
pub const APP_STORE_BASE_URL: &str = "https://itunes.apple.com";

/// App Store adapter
pub struct AppStoreAdapter {
    client: HttpClient,
    base_url: String,
}

/// iTunes lookup response
#[derive(Debug, Deserialize)]
struct LookupResponse {
    /// Number of matching apps
    #[serde(rename = "resultCount", default)]
    result_count: u64,
    /// Matching apps, best match first
    #[serde(default)]
    results: Vec<LookupEntry>,
}

/// Single app record from the lookup API
#[derive(Debug, Deserialize)]
struct LookupEntry {
    /// Published version
    #[serde(default)]
    version: Option<String>,
    /// Canonical App Store page
    #[serde(rename = "trackViewUrl", default)]
    track_view_url: Option<String>,
}

impl AppStoreAdapter {
    /// Create a new App Store adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, APP_STORE_BASE_URL)
    }

    /// Create an adapter that talks to a different host (used by tests)
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the lookup URL for a bundle id
    fn build_url(&self, bundle_id: &str) -> String {
        format!("{}/lookup?bundleId={}", self.base_url, bundle_id)
    }
}

/// Pick the first record out of a decoded response
///
/// Zero results, or a first record without a version, mean the store does
/// not know the app. That is reported as absent, not as an error.
fn first_result(response: LookupResponse) -> LookupResult {
    if response.result_count == 0 {
        return LookupResult::absent();
    }

    match response.results.into_iter().next() {
        Some(LookupEntry {
            version: Some(version),
            track_view_url,
        }) => LookupResult {
            version: Some(version),
            store_url: track_view_url,
        },
        _ => LookupResult::absent(),
    }
}

#[async_trait]
impl StoreAdapter for AppStoreAdapter {
    fn platform(&self) -> Platform {
        Platform::Ios
    }

    fn store_name(&self) -> &'static str {
        Platform::Ios.store_name()
    }

    async fn lookup(&self, bundle_id: &str) -> Result<LookupResult, LookupError> {
        let url = self.build_url(bundle_id);
        let response: LookupResponse = self
            .client
            .fetch_json(&url, bundle_id, self.store_name())
            .await?;

        debug!(
            bundle_id,
            result_count = response.result_count,
            "App Store lookup decoded"
        );

        Ok(first_result(response))
    }
}
