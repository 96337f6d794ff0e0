//! Wallet components and the state they share with the view layer.

mod observable;
mod panel;

pub mod balance;
pub mod history;
pub mod shell;
pub mod transaction;

pub use balance::{BalancePanel, BalanceState, BALANCE_PLACEHOLDER};
pub use history::{HistoryPanel, HistoryRow, HistoryState};
pub use observable::{Observable, SubscriptionId};
pub use panel::{AddressBoundPanel, PanelSource, PanelState};
pub use shell::{ConnectionState, Shell};
pub use transaction::{
    PaymentFields, TransactionForm, TransactionFormState, TransactionLifecycle,
};
