//! UI Components

pub mod balance;
pub mod history;
pub mod navbar;
pub mod transaction;
pub mod welcome;

pub use balance::BalanceCard;
pub use history::HistoryCard;
pub use navbar::Navbar;
pub use transaction::TransactionCard;
pub use welcome::Welcome;
