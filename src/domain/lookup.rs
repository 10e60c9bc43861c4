//! Store lookup result type

use serde::{Deserialize, Serialize};

/// What a single store lookup found
///
/// A missing `version` means the store answered but had no usable record for
/// the app. That is a normal outcome, distinct from a failed lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Version currently published in the store
    pub version: Option<String>,
    /// Canonical store page for the app
    pub store_url: Option<String>,
}

impl LookupResult {
    /// Creates a result with both a version and a store URL
    pub fn found(version: impl Into<String>, store_url: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            store_url: Some(store_url.into()),
        }
    }

    /// Creates an empty result (no record in the store)
    pub fn absent() -> Self {
        Self::default()
    }

    /// Creates a result with a store URL but no version
    pub fn url_only(store_url: impl Into<String>) -> Self {
        Self {
            version: None,
            store_url: Some(store_url.into()),
        }
    }

    /// Returns true when no version was found
    pub fn is_absent(&self) -> bool {
        self.version.is_none()
    }
}
