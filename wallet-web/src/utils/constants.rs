//! Application constants

use lib_core::config::{
    ENV_EXPLORER_URL, ENV_HISTORY_LIMIT, ENV_HORIZON_URL, ENV_MAX_PAYMENT_AMOUNT, ENV_NETWORK,
    ENV_NETWORK_PASSPHRASE, ENV_REFRESH_DELAY_MS,
};

pub const APP_NAME: &str = "Stellar Demo";

// UI constants
pub const COPIED_INDICATOR_MS: u32 = 2000;
pub const BALANCE_TITLE: &str = "Balance";
pub const HISTORY_EMPTY_TITLE: &str = "No transactions found";
pub const HISTORY_EMPTY_HINT: &str = "Your transaction history will appear here";

/// Config values baked in at build time (`STELLAR_NETWORK=mainnet trunk build`).
pub fn build_time_config(key: &str) -> Option<String> {
    let value = match key {
        ENV_NETWORK => option_env!("STELLAR_NETWORK"),
        ENV_HORIZON_URL => option_env!("HORIZON_URL"),
        ENV_NETWORK_PASSPHRASE => option_env!("NETWORK_PASSPHRASE"),
        ENV_EXPLORER_URL => option_env!("EXPLORER_URL"),
        ENV_REFRESH_DELAY_MS => option_env!("REFRESH_DELAY_MS"),
        ENV_HISTORY_LIMIT => option_env!("HISTORY_LIMIT"),
        ENV_MAX_PAYMENT_AMOUNT => option_env!("MAX_PAYMENT_AMOUNT"),
        _ => None,
    };
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_copy() {
        assert_eq!(BALANCE_TITLE, "Balance");
        assert_eq!(HISTORY_EMPTY_TITLE, "No transactions found");
        assert_eq!(HISTORY_EMPTY_HINT, "Your transaction history will appear here");
    }

    #[test]
    fn test_unknown_build_key_is_none() {
        assert_eq!(build_time_config("NOT_A_CONFIG_KEY"), None);
    }
}
