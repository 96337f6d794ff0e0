//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet UI and the ledger facade.
//! Every value that crosses the facade boundary lives here so that the core state
//! machines, the Horizon client and the browser app agree on one shape.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the ledger facade
//!   - **[`dto::ledger`]**: balances, transaction records, payment requests/results
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!   - **[`utils::format_amount`]**: Group and trim decimal amount strings
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using `serde`:
//! - Field names use **snake_case** except where the browser bindings hand us
//!   camelCase objects (see [`dto::ledger::TransactionRecord`])
//! - Optional fields are omitted from JSON when `None`
//! - Amounts are decimal **strings**, never floats, to avoid precision loss
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::ledger::{PaymentRequest, TransactionRecord};
//! use shared::utils::truncate_address;
//!
//! let request = PaymentRequest {
//!     from: "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7".to_string(),
//!     to: "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H".to_string(),
//!     amount: "12.5".to_string(),
//!     memo: None,
//! };
//!
//! assert_eq!(truncate_address(&request.to), "GBRP...OX2H");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
