//! # Validation Utilities
//!
//! Structural checks on payment input, run before anything touches the network.
//! These are sanity checks only: no strkey checksum is verified here.

/// Every ed25519 account id starts with this character.
pub const ACCOUNT_ID_PREFIX: char = 'G';

/// Length of an encoded ed25519 account id.
pub const ACCOUNT_ID_MIN_LEN: usize = 56;

/// Text memos are limited to 28 bytes.
pub const MEMO_TEXT_MAX_BYTES: usize = 28;

/// Fraction digits representable on the ledger.
pub const AMOUNT_MAX_DECIMALS: usize = 7;

const STROOPS_PER_UNIT: f64 = 1e7;

// Well above f64 rounding error for amounts up to 1e11 stroops.
const STROOP_TOLERANCE: f64 = 1e-3;

/// Validate the shape of a recipient account address.
pub fn validate_account_address(address: &str) -> Result<(), String> {
    if address.starts_with(ACCOUNT_ID_PREFIX) && address.len() >= ACCOUNT_ID_MIN_LEN {
        Ok(())
    } else {
        Err("Invalid recipient address. Please check the Stellar address.".to_string())
    }
}

/// Validate a payment amount: a positive number no greater than `max`,
/// representable in whole stroops.
///
/// Returns the parsed value on success.
pub fn validate_amount(amount: &str, max: f64) -> Result<f64, String> {
    let range_error = || {
        format!(
            "Invalid amount. Please enter a valid amount between 0.0000001 and {} XLM.",
            max
        )
    };

    let value: f64 = amount.trim().parse().map_err(|_| range_error())?;
    if !value.is_finite() || value <= 0.0 || value > max {
        return Err(range_error());
    }

    let stroops = value * STROOPS_PER_UNIT;
    if (stroops - stroops.round()).abs() > STROOP_TOLERANCE {
        return Err(format!(
            "Invalid amount. Stellar amounts support at most {} decimal places.",
            AMOUNT_MAX_DECIMALS
        ));
    }

    Ok(value)
}

/// Validate an optional text memo. Blank memos become `None`.
pub fn validate_memo(memo: &str) -> Result<Option<String>, String> {
    let memo = memo.trim();
    if memo.is_empty() {
        return Ok(None);
    }
    if memo.len() > MEMO_TEXT_MAX_BYTES {
        return Err(format!(
            "Memo is too long. Text memos are limited to {} bytes.",
            MEMO_TEXT_MAX_BYTES
        ));
    }
    Ok(Some(memo.to_string()))
}
