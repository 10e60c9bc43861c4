//! Result of a single update check

use super::{LookupResult, Platform};
use crate::version::is_update_available;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary state of a check, used for messaging and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// The store has a newer version
    UpdateAvailable,
    /// Installed version is the same or newer
    UpToDate,
    /// The store has no version for this app
    NotPublished,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::UpdateAvailable => write!(f, "update available"),
            CheckStatus::UpToDate => write!(f, "up to date"),
            CheckStatus::NotPublished => write!(f, "not published"),
        }
    }
}

/// Outcome of comparing the installed version with the store version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Platform whose store was queried
    pub platform: Platform,
    /// Bundle id or package name that was looked up
    pub app_id: String,
    /// Installed version
    pub current_version: String,
    /// Version published in the store, if any
    pub live_version: Option<String>,
    /// Whether the store version is newer than the installed one
    pub needs_update: bool,
    /// Where to send the user to update
    pub store_url: Option<String>,
    /// When the check completed
    pub checked_at: DateTime<Utc>,
}

impl CheckOutcome {
    /// Build an outcome from a lookup result
    pub fn from_lookup(
        platform: Platform,
        app_id: impl Into<String>,
        current_version: impl Into<String>,
        lookup: LookupResult,
    ) -> Self {
        let current_version = current_version.into();
        let needs_update = lookup
            .version
            .as_deref()
            .is_some_and(|live| is_update_available(live, &current_version));

        Self {
            platform,
            app_id: app_id.into(),
            current_version,
            live_version: lookup.version,
            needs_update,
            store_url: lookup.store_url,
            checked_at: Utc::now(),
        }
    }

    /// Summary state of this outcome
    pub fn status(&self) -> CheckStatus {
        if self.live_version.is_none() {
            CheckStatus::NotPublished
        } else if self.needs_update {
            CheckStatus::UpdateAvailable
        } else {
            CheckStatus::UpToDate
        }
    }
}
