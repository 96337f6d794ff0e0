//! # Utilities Library
//!
//! Shared utility functions for environment lookup, timestamps and payment input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::lookup_env;
pub use time::{format_timestamp, parse_utc};
pub use validation::{validate_account_address, validate_amount, validate_memo};
