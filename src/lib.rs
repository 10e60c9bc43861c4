//! storecheck - mobile app update checker library
//!
//! This library answers one question: is the installed version of an app
//! older than the one published in its store?
//! - iOS: Apple App Store (iTunes lookup API)
//! - Android: Google Play (listing page)
//!
//! ```no_run
//! use storecheck::checker::UpdateChecker;
//! use storecheck::domain::Platform;
//!
//! # async fn demo() -> Result<(), storecheck::error::LookupError> {
//! let checker = UpdateChecker::new()?;
//! let outcome = checker.check("1.2.0", Platform::Ios, "com.example.app").await?;
//! if outcome.needs_update {
//!     println!("update to {:?}", outcome.live_version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod checker;
pub mod cli;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod opener;
pub mod output;
pub mod progress;
pub mod store;
pub mod version;

pub use version::is_update_available;
