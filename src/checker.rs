//! Update check coordination
//!
//! This module provides:
//! - Workflow coordination: lookup → compare → outcome
//! - Reading installed metadata from a provider
//! - Sending the user to the store page
//!
//! Nothing is cached; each call builds a fresh outcome and the caller owns it.

use crate::domain::{CheckOutcome, Platform};
use crate::error::{LookupError, OpenError};
use crate::metadata::MetadataProvider;
use crate::opener::UrlOpener;
use crate::store::{HttpClient, StoreEndpoints, StoreVersionResolver};
use tracing::{debug, info};

/// Runs update checks against the app stores
#[derive(Clone)]
pub struct UpdateChecker {
    resolver: StoreVersionResolver,
}

impl UpdateChecker {
    /// Create a checker against the real stores
    pub fn new() -> Result<Self, LookupError> {
        Ok(Self::with_client(HttpClient::new()?, StoreEndpoints::default()))
    }

    /// Create a checker with a custom HTTP client and store hosts
    pub fn with_client(client: HttpClient, endpoints: StoreEndpoints) -> Self {
        Self {
            resolver: StoreVersionResolver::with_endpoints(client, endpoints),
        }
    }

    /// Compare `current_version` with what the store for `platform` publishes
    ///
    /// Lookup failures are returned as errors, never as "no update needed".
    pub async fn check(
        &self,
        current_version: &str,
        platform: Platform,
        app_id: &str,
    ) -> Result<CheckOutcome, LookupError> {
        let lookup = self.resolver.resolve_latest(platform, app_id).await?;

        let outcome = CheckOutcome::from_lookup(platform, app_id, current_version, lookup);
        info!(
            %platform,
            app_id,
            current = current_version,
            live = outcome.live_version.as_deref().unwrap_or("-"),
            needs_update = outcome.needs_update,
            "update check finished"
        );

        Ok(outcome)
    }

    /// Run a check for the app described by `metadata`
    pub async fn check_installed(
        &self,
        metadata: &dyn MetadataProvider,
        platform: Platform,
    ) -> Result<CheckOutcome, LookupError> {
        let version = metadata.installed_version();
        let app_id = metadata.app_identifier(platform);
        self.check(&version, platform, &app_id).await
    }
}

/// Open the store page recorded in `outcome`
///
/// Failure here leaves the outcome untouched.
pub fn open_store(outcome: &CheckOutcome, opener: &dyn UrlOpener) -> Result<(), OpenError> {
    let url = outcome.store_url.as_deref().ok_or(OpenError::NoUrl)?;
    debug!(%url, "redirecting to store");
    opener.open(url)
}
