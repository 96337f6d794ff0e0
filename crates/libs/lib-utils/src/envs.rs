//! # Environment Variables
//!
//! Utilities for reading environment variables.

use std::env;

/// Look up an environment variable, treating unset and empty values alike.
///
/// Shaped to plug into lookup-based loaders such as
/// `WalletConfig::from_lookup(lookup_env)`.
pub fn lookup_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
