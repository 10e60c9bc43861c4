//! Store adapters for looking up published app versions
//!
//! This module provides:
//! - HTTP client shared foundation
//! - Apple App Store adapter (iTunes lookup API)
//! - Google Play adapter (listing page + ordered version patterns)
//! - `StoreVersionResolver`, which picks the adapter for a platform

mod app_store;
mod client;
pub mod patterns;
mod play_store;

pub use app_store::{AppStoreAdapter, APP_STORE_BASE_URL};
pub use client::{HttpClient, DEFAULT_TIMEOUT};
pub use play_store::{canonical_url as play_store_url, PlayStoreAdapter, PLAY_STORE_BASE_URL};

use crate::domain::{LookupResult, Platform};
use crate::error::LookupError;
use async_trait::async_trait;

/// Trait for store adapters
#[async_trait]
pub trait StoreAdapter: Send + Sync {
    /// Get the platform this adapter handles
    fn platform(&self) -> Platform;

    /// Get the store name
    fn store_name(&self) -> &'static str;

    /// Look up the published version of an app
    ///
    /// `Ok` with an absent result means the store had no version for the app.
    /// `Err` means the store could not be queried.
    async fn lookup(&self, app_id: &str) -> Result<LookupResult, LookupError>;
}

/// Base URLs for each store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEndpoints {
    /// Host serving `/lookup`
    pub app_store: String,
    /// Host serving `/store/apps/details`
    pub play_store: String,
}

impl Default for StoreEndpoints {
    fn default() -> Self {
        Self {
            app_store: APP_STORE_BASE_URL.to_string(),
            play_store: PLAY_STORE_BASE_URL.to_string(),
        }
    }
}

/// Create a store adapter for the given platform
pub fn create_adapter(
    platform: Platform,
    client: HttpClient,
    endpoints: &StoreEndpoints,
) -> Box<dyn StoreAdapter> {
    match platform {
        Platform::Ios => Box::new(AppStoreAdapter::with_base_url(client, &endpoints.app_store)),
        Platform::Android => Box::new(PlayStoreAdapter::with_base_url(
            client,
            &endpoints.play_store,
        )),
    }
}

/// Resolves the latest published version for a platform and app id
///
/// Holds no state between calls; every call performs exactly one request.
#[derive(Clone)]
pub struct StoreVersionResolver {
    client: HttpClient,
    endpoints: StoreEndpoints,
}

impl StoreVersionResolver {
    /// Create a resolver against the real stores
    pub fn new(client: HttpClient) -> Self {
        Self::with_endpoints(client, StoreEndpoints::default())
    }

    /// Create a resolver against custom store hosts
    pub fn with_endpoints(client: HttpClient, endpoints: StoreEndpoints) -> Self {
        Self { client, endpoints }
    }

    /// Look up the latest version of `app_id` in the store for `platform`
    pub async fn resolve_latest(
        &self,
        platform: Platform,
        app_id: &str,
    ) -> Result<LookupResult, LookupError> {
        let adapter = create_adapter(platform, self.client.clone(), &self.endpoints);
        adapter.lookup(app_id).await
    }
}
