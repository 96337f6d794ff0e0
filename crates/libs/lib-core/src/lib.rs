//! # Core Library
//!
//! Wallet state machines, configuration, and the seams to the ledger.
//!
//! ## Modules
//!
//! - **[`error`]**: `AppError` taxonomy (connection, fetch, validation, submission)
//! - **[`config`]**: `WalletConfig` loaded from the environment or compile-time values
//! - **[`facade`]**: `LedgerFacade`, the boundary to wallet extension + ledger RPC
//! - **[`scheduler`]**: `Scheduler`, runs a task after a delay on the host event loop
//! - **[`model`]**: the Balance Panel, History Panel, Transaction Form and Shell
//!
//! ## Execution model
//!
//! Everything runs on one thread. Facade futures are `!Send` so the same code
//! drives the browser event loop and a current-thread tokio runtime in tests.

pub mod config;
pub mod error;
pub mod facade;
pub mod model;
pub mod scheduler;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::WalletConfig;
pub use error::{AppError, Result};
pub use facade::LedgerFacade;
pub use model::{
    BalancePanel, ConnectionState, HistoryPanel, PaymentFields, Shell, TransactionForm,
    TransactionLifecycle,
};
pub use scheduler::Scheduler;
