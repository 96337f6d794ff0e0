//! Horizon response shapes and their mapping onto wallet DTOs.

use serde::Deserialize;
use shared::{TransactionRecord, NATIVE_ASSET_CODE};

#[derive(Debug, Clone, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub balances: Vec<BalanceLine>,
}

impl AccountResponse {
    /// Native balance line, if the account carries one.
    pub fn native_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|line| line.asset_type == "native")
            .map(|line| line.balance.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceLine {
    pub balance: String,
    pub asset_type: String,
    pub asset_code: Option<String>,
    pub asset_issuer: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedOperations,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddedOperations {
    pub records: Vec<OperationRecord>,
}

/// One record from `/accounts/{id}/payments`.
///
/// Fields differ per operation type, so everything past the common header is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: String,
    pub transaction_hash: String,
    pub source_account: Option<String>,

    // payment, path_payment_*
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
    pub asset_type: Option<String>,
    pub asset_code: Option<String>,

    // create_account
    pub funder: Option<String>,
    pub account: Option<String>,
    pub starting_balance: Option<String>,

    // account_merge
    pub into: Option<String>,
}

impl OperationRecord {
    fn asset(&self) -> Option<String> {
        match self.asset_type.as_deref() {
            Some("native") => Some(NATIVE_ASSET_CODE.to_string()),
            Some(_) => self.asset_code.clone(),
            None => None,
        }
    }
}

impl From<OperationRecord> for TransactionRecord {
    fn from(op: OperationRecord) -> Self {
        let (from, to, amount, asset) = match op.kind.as_str() {
            "create_account" => (
                op.funder.clone(),
                op.account.clone(),
                op.starting_balance.clone(),
                Some(NATIVE_ASSET_CODE.to_string()),
            ),
            "account_merge" => (op.account.clone(), op.into.clone(), None, None),
            "payment" | "path_payment_strict_send" | "path_payment_strict_receive" => {
                (op.from.clone(), op.to.clone(), op.amount.clone(), op.asset())
            }
            _ => (op.source_account.clone(), None, None, None),
        };

        TransactionRecord {
            id: op.id,
            kind: op.kind,
            amount,
            asset,
            from,
            to,
            created_at: op.created_at,
            hash: op.transaction_hash,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub hash: String,
    #[serde(default = "default_true")]
    pub successful: bool,
}

fn default_true() -> bool {
    true
}

/// Horizon problem document (RFC 7807 style).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    pub extras: Option<ProblemExtras>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProblemExtras {
    pub result_codes: Option<ResultCodes>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultCodes {
    pub transaction: Option<String>,
    #[serde(default)]
    pub operations: Vec<String>,
}

impl Problem {
    /// Result codes as `tx_failed: op_underfunded`, if Horizon sent any.
    pub fn result_codes(&self) -> Option<String> {
        let codes = self.extras.as_ref()?.result_codes.as_ref()?;
        let ops = codes.operations.join(", ");
        let mut parts: Vec<&str> = codes.transaction.iter().map(String::as_str).collect();
        if !ops.is_empty() {
            parts.push(&ops);
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(": "))
        }
    }

    pub fn summary(&self) -> String {
        match (self.title.is_empty(), self.detail.is_empty()) {
            (false, false) => format!("{}. {}", self.title, self.detail),
            (false, true) => self.title.clone(),
            (true, false) => self.detail.clone(),
            (true, true) => "Unknown Horizon error".to_string(),
        }
    }
}
