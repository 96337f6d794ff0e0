//! # Stellar Library
//!
//! Horizon REST integration for the wallet: native balance lookup, payment
//! history, transaction submission and stellar.expert links.
//!
//! Transaction building and signing stay in the browser wallet; this crate
//! only moves signed envelopes and JSON.

pub mod error;
pub mod explorer;
pub mod horizon;
pub mod types;

pub use error::{Error, Result};
pub use explorer::explorer_link;
pub use horizon::HorizonClient;
