//! Core domain models for storecheck
//!
//! This module contains the fundamental types used throughout the application:
//! - Platform types for supported app stores
//! - Store lookup results
//! - Check outcomes

mod lookup;
mod outcome;
mod platform;

pub use lookup::LookupResult;
pub use outcome::{CheckOutcome, CheckStatus};
pub use platform::Platform;
