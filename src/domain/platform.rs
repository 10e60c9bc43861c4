//! Platform type definitions for supported app stores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported mobile platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS (Apple App Store)
    Ios,
    /// Android (Google Play Store)
    Android,
}

impl Platform {
    /// Returns the store name for this platform
    pub fn store_name(&self) -> &'static str {
        match self {
            Platform::Ios => "App Store",
            Platform::Android => "Google Play",
        }
    }

    /// Returns the display name for this platform
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
        }
    }

    /// Returns what the store calls the app identifier
    pub fn identifier_label(&self) -> &'static str {
        match self {
            Platform::Ios => "bundle id",
            Platform::Android => "package name",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" | "iphone" | "apple" => Ok(Platform::Ios),
            "android" | "google" => Ok(Platform::Android),
            _ => Err(ConfigError::InvalidPlatform {
                value: s.to_string(),
            }),
        }
    }
}
