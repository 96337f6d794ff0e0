use serde::{Deserialize, Serialize};

/// Asset code shown for native-asset records that carry no explicit code.
pub const NATIVE_ASSET_CODE: &str = "XLM";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    Testnet,
    Mainnet,
}

impl NetworkType {
    pub fn passphrase(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "Test SDF Network ; September 2015",
            NetworkType::Mainnet => "Public Global Stellar Network ; September 2015",
        }
    }

    pub fn horizon_url(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "https://horizon-testnet.stellar.org",
            NetworkType::Mainnet => "https://horizon.stellar.org",
        }
    }

    /// Path segment used by stellar.expert for this network.
    pub fn explorer_segment(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "testnet",
            NetworkType::Mainnet => "public",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            NetworkType::Testnet => "Stellar Testnet",
            NetworkType::Mainnet => "Stellar Mainnet",
        }
    }
}

impl std::str::FromStr for NetworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "testnet" | "test" => Ok(NetworkType::Testnet),
            "mainnet" | "public" => Ok(NetworkType::Mainnet),
            other => Err(format!("Unknown Stellar network: {}", other)),
        }
    }
}

/// What an explorer link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplorerKind {
    #[serde(rename = "tx")]
    Transaction,
    Account,
}

impl ExplorerKind {
    pub fn path_segment(&self) -> &'static str {
        match self {
            ExplorerKind::Transaction => "tx",
            ExplorerKind::Account => "account",
        }
    }
}

/// Native balance of an account, kept as the decimal string the ledger reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDto {
    pub xlm: String,
}

/// Read-only projection of one history entry.
///
/// `type` is the ledger operation type (`payment`, `create_account`, ...).
/// Direction is never stored; see [`TransactionRecord::direction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(alias = "createdAt")]
    pub created_at: String,
    pub hash: String,
}

/// Direction of a record relative to the account viewing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Sent => "Sent",
            Direction::Received => "Received",
        }
    }

    pub fn sign(&self) -> &'static str {
        match self {
            Direction::Sent => "-",
            Direction::Received => "+",
        }
    }
}

impl TransactionRecord {
    /// `Sent` only when `from` is exactly `owner`; everything else,
    /// including a missing `from`, counts as `Received`.
    pub fn direction(&self, owner: &str) -> Direction {
        if self.from.as_deref() == Some(owner) {
            Direction::Sent
        } else {
            Direction::Received
        }
    }

    /// The other side of the record: `to` for sent records, `from` otherwise.
    pub fn counterparty(&self, owner: &str) -> &str {
        let side = match self.direction(owner) {
            Direction::Sent => &self.to,
            Direction::Received => &self.from,
        };
        side.as_deref().unwrap_or("")
    }

    pub fn asset_code(&self) -> &str {
        match self.asset.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => NATIVE_ASSET_CODE,
        }
    }
}

/// Parameters of a single native-asset payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub from: String,
    pub to: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Outcome reported by the facade for a payment that did not error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}
