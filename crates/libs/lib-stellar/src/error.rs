use lib_core::AppError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Non-success status; `detail` is Horizon's problem text when present.
    #[error("Horizon error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// Submission refused by the ledger, with Horizon's result codes.
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

impl Error {
    /// Message suitable for the interface.
    pub fn user_message(&self) -> String {
        match self {
            Error::AccountNotFound(_) => {
                "Account not found. Fund it on testnet with Friendbot first.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// For balance and history loads.
    pub fn into_fetch(self) -> AppError {
        AppError::Fetch(self.user_message())
    }

    /// For payment submission.
    pub fn into_submission(self) -> AppError {
        AppError::Submission(self.user_message())
    }
}
