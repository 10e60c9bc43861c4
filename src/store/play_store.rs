//! Google Play Store adapter
//!
//! Fetches the public listing page and pattern-matches the version out of it.
//! Lookup URL: https://play.google.com/store/apps/details?id={package}&hl=en&gl=US
//!
//! The locale parameters pin the page language and layout so the patterns
//! stay stable. They are never part of the URL handed back to users.

use crate::domain::{LookupResult, Platform};
use crate::error::LookupError;
use crate::store::patterns::{first_match, PLAY_STORE_MATCHERS};
use crate::store::{HttpClient, StoreAdapter};
use async_trait::async_trait;
use tracing::debug;

/// Google Play base URL
pub const PLAY_STORE_BASE_URL: &str = "https://play.google.com";

/// Canonical listing path
const DETAILS_PATH: &str = "/store/apps/details";

/// Locale parameters appended to lookups only
const LOOKUP_LOCALE: &str = "hl=en&gl=US";

/// Build the canonical listing URL users should be sent to
///
/// Depends only on the package name, so it is available even when the
/// version could not be parsed.
pub fn canonical_url(package: &str) -> String {
    format!("{}{}?id={}", PLAY_STORE_BASE_URL, DETAILS_PATH, package)
}

/// Google Play adapter
pub struct PlayStoreAdapter {
    client: HttpClient,
    base_url: String,
}

impl PlayStoreAdapter {
    /// Create a new Google Play adapter
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, PLAY_STORE_BASE_URL)
    }

    /// Create an adapter that fetches listings from a different host (used by tests)
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL of the page we scrape
    fn build_lookup_url(&self, package: &str) -> String {
        format!(
            "{}{}?id={}&{}",
            self.base_url, DETAILS_PATH, package, LOOKUP_LOCALE
        )
    }
}

#[async_trait]
impl StoreAdapter for PlayStoreAdapter {
    fn platform(&self) -> Platform {
        Platform::Android
    }

    fn store_name(&self) -> &'static str {
        Platform::Android.store_name()
    }

    async fn lookup(&self, package: &str) -> Result<LookupResult, LookupError> {
        let url = self.build_lookup_url(package);
        let body = self
            .client
            .fetch_text(&url, package, self.store_name())
            .await?;

        let store_url = canonical_url(package);

        match first_match(&PLAY_STORE_MATCHERS, &body) {
            Some((matcher, version)) => {
                debug!(package, matcher = matcher.name, %version, "Play listing matched");
                Ok(LookupResult::found(version, store_url))
            }
            None => {
                debug!(package, bytes = body.len(), "no version pattern matched");
                Ok(LookupResult::url_only(store_url))
            }
        }
    }
}
