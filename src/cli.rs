//! CLI argument parsing module for storecheck

use crate::domain::Platform;
use crate::store::{StoreEndpoints, APP_STORE_BASE_URL, PLAY_STORE_BASE_URL};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout in seconds: {}", s))?;

    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }

    Ok(Duration::from_secs(secs))
}

/// Check whether an installed mobile app is behind its store version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "storecheck",
    version,
    about = "Check an installed app version against the App Store or Google Play"
)]
pub struct CliArgs {
    /// Store to query (ios or android)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Bundle id (iOS) or package name (Android)
    #[arg(short, long)]
    pub app_id: Option<String>,

    /// Installed version to compare against the store
    #[arg(short, long)]
    pub current: Option<String>,

    /// App manifest with version and identifiers [default: ./storecheck.toml if present]
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Open the store page when an update is available
    #[arg(long)]
    pub open: bool,

    /// Exit with status 2 when an update is available
    #[arg(long)]
    pub exit_code: bool,

    // Output options
    /// Output the outcome in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Network options
    /// Request timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30")]
    pub timeout: Duration,

    /// App Store lookup host
    #[arg(long, default_value = APP_STORE_BASE_URL, hide = true)]
    pub app_store_url: String,

    /// Google Play host
    #[arg(long, default_value = PLAY_STORE_BASE_URL, hide = true)]
    pub play_store_url: String,
}

impl CliArgs {
    /// Store hosts selected on the command line
    pub fn endpoints(&self) -> StoreEndpoints {
        StoreEndpoints {
            app_store: self.app_store_url.clone(),
            play_store: self.play_store_url.clone(),
        }
    }

    /// Whether progress and decoration should be shown
    pub fn interactive(&self) -> bool {
        !self.quiet && !self.json
    }
}
