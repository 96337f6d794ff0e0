//! # Data Transfer Objects (DTOs)
//!
//! Structures passed across the ledger facade boundary.
//!
//! ## Module Organization
//!
//! - [`ledger`] - balances, history records, payment requests and results
//!
//! ## Serialization Format
//!
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: Serialize to lowercase strings using `#[serde(rename_all = "lowercase")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON
//!
//! A history record as produced by the facade:
//!
//! ```text
//! {
//!   "id": "1234567890",
//!   "type": "payment",
//!   "amount": "25.0000000",
//!   "asset": "XLM",
//!   "from": "GAAZ...CWN7",
//!   "to": "GBRP...OX2H",
//!   "created_at": "2025-03-01T12:00:00Z",
//!   "hash": "3389e9f0f1a65f19736cacf544c2e825313e8447f569233bb8db39aa607c8889"
//! }
//! ```

pub mod ledger;

pub use ledger::*;
