//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the wallet core.
//! It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! Errors are categorized by where they surface in the interface:
//!
//! 1. **Blocking**
//!    - [`Connection`](AppError::Connection) - wallet missing or request rejected; shown as an alert
//!
//! 2. **Inline**
//!    - [`Fetch`](AppError::Fetch) - balance/history load failed; stale data stays on screen
//!    - [`Validation`](AppError::Validation) - local input check failed; no network call made
//!    - [`Submission`](AppError::Submission) - signing or submission failed; user may retry
//!
//! 3. **Startup**
//!    - [`Config`](AppError::Config) - invalid configuration values
//!
//! No error is fatal. Every path returns the UI to an interactive state, and
//! there is no automatic retry anywhere.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_connected(address: Option<&str>) -> Result<&str> {
//!     address.ok_or_else(|| AppError::Validation("Connect a wallet before sending.".to_string()))
//! }
//!
//! let err = require_connected(None).unwrap_err();
//! assert_eq!(err.message(), "Connect a wallet before sending.");
//! assert_eq!(err.to_string(), "Validation error: Connect a wallet before sending.");
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Wallet-wide error type.
///
/// `Display` carries the category prefix for logs; [`AppError::message`] is the
/// bare human-readable text the interface shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Wallet extension unavailable, locked, or the user rejected access.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Balance or history could not be loaded (network, account not found).
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Input failed a local check before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment signing was rejected or the ledger refused the transaction.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Configuration value missing or out of range.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// The message without its category prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Connection(msg)
            | AppError::Fetch(msg)
            | AppError::Validation(msg)
            | AppError::Submission(msg)
            | AppError::Config(msg) => msg,
        }
    }

    /// Whether the interface should interrupt the user (alert) for this error.
    pub fn is_blocking(&self) -> bool {
        matches!(self, AppError::Connection(_))
    }
}
