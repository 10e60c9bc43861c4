//! Application error types using thiserror
//!
//! Error hierarchy:
//! - LookupError: the store could not be reached or answered badly
//! - OpenError: the store page could not be opened
//! - ConfigError: Issues with CLI options or the app manifest
//!
//! "App not found in the store" is not an error. It is reported as an absent
//! lookup result so callers can tell it apart from a connectivity problem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to store communication
#[derive(Error, Debug)]
pub enum LookupError {
    /// Request could not be sent or the connection failed
    #[error("failed to reach {store} for '{app_id}': {message}")]
    Network {
        app_id: String,
        store: String,
        message: String,
    },

    /// Store answered with a non-success status
    #[error("{store} returned HTTP {status} for '{app_id}'")]
    HttpStatus {
        app_id: String,
        store: String,
        status: u16,
    },

    /// Timeout
    #[error("timeout while looking up '{app_id}' on {store}")]
    Timeout { app_id: String, store: String },

    /// Response body could not be decoded
    #[error("invalid response from {store} for '{app_id}': {message}")]
    InvalidResponse {
        app_id: String,
        store: String,
        message: String,
    },
}

/// Errors related to opening the store page
#[derive(Error, Debug)]
pub enum OpenError {
    /// The check produced no store URL
    #[error("no store URL available to open")]
    NoUrl,

    /// URL scheme is not something we hand to the system
    #[error("unsupported store URL: {url}")]
    UnsupportedUrl { url: String },

    /// The system launcher failed
    #[error("could not open {url}: {message}")]
    Launch { url: String, message: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid platform name
    #[error("invalid platform '{value}': expected 'ios' or 'android'")]
    InvalidPlatform { value: String },

    /// No platform on the command line or in the manifest
    #[error("no platform given: pass --platform or set app.platform in the manifest")]
    MissingPlatform,

    /// No app identifier for the selected platform
    #[error("no {label} given for {platform}: pass --app-id or set it in the manifest")]
    MissingAppId {
        platform: String,
        label: &'static str,
    },

    /// No installed version
    #[error("no current version given: pass --current or set app.version in the manifest")]
    MissingVersion,

    /// Failed to read manifest file
    #[error("failed to read manifest {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    ParseManifest { path: PathBuf, message: String },
}

impl LookupError {
    /// Creates a new Network error
    pub fn network(
        app_id: impl Into<String>,
        store: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::Network {
            app_id: app_id.into(),
            store: store.into(),
            message: message.into(),
        }
    }

    /// Creates a new HttpStatus error
    pub fn http_status(app_id: impl Into<String>, store: impl Into<String>, status: u16) -> Self {
        LookupError::HttpStatus {
            app_id: app_id.into(),
            store: store.into(),
            status,
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(app_id: impl Into<String>, store: impl Into<String>) -> Self {
        LookupError::Timeout {
            app_id: app_id.into(),
            store: store.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        app_id: impl Into<String>,
        store: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::InvalidResponse {
            app_id: app_id.into(),
            store: store.into(),
            message: message.into(),
        }
    }

    /// Returns true when the store could not be reached at all
    ///
    /// Callers use this to pick between "check your connection" and
    /// "the store had a problem" messaging.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, LookupError::Network { .. } | LookupError::Timeout { .. })
    }

    /// Returns the HTTP status if the store answered with one
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl ConfigError {
    /// Creates a new ReadManifest error
    pub fn read_manifest(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadManifest {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseManifest error
    pub fn parse_manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::ParseManifest {
            path: path.into(),
            message: message.into(),
        }
    }
}
