//! # Ledger Facade
//!
//! The boundary between the wallet components and everything ledger-side:
//! the browser wallet extension, transaction building and signing, and
//! Horizon RPC.
//!
//! Components only ever talk to a `dyn LedgerFacade`, so tests drive them with
//! a scripted double and the browser build plugs in Freighter + Horizon.

use async_trait::async_trait;
use shared::{
    truncate_address, BalanceDto, ExplorerKind, PaymentRequest, PaymentResult, TransactionRecord,
};

use crate::error::Result;

/// Trait for ledger and wallet operations
///
/// Futures are `!Send`: the browser event loop is single-threaded and native
/// hosts drive these on a `LocalSet`.
#[async_trait(?Send)]
pub trait LedgerFacade: Send + Sync {
    /// Ask the wallet extension for access and return the account address.
    ///
    /// Fails with [`AppError::Connection`](crate::AppError::Connection) when no
    /// wallet is installed or the user rejects the request.
    async fn connect_wallet(&self) -> Result<String>;

    /// Forget the current session. Never fails observably.
    fn disconnect(&self);

    /// Native balance of `address`.
    async fn get_balance(&self, address: &str) -> Result<BalanceDto>;

    /// Up to `limit` most recent records for `address`, newest first.
    async fn get_recent_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>>;

    /// Build, sign and submit a native payment.
    ///
    /// May return `success: false` without an error.
    async fn send_payment(&self, request: PaymentRequest) -> Result<PaymentResult>;

    /// Explorer URL for a transaction hash or an account id.
    fn explorer_link(&self, id: &str, kind: ExplorerKind) -> String;

    /// Shortened address for display.
    fn format_address(&self, address: &str) -> String {
        truncate_address(address)
    }
}
