//! # Wallet Configuration
//!
//! Network endpoints and UI timing, loaded from key/value lookups and validated
//! before use so a misconfigured build fails fast.
//!
//! ## Sources
//!
//! - Native hosts: [`WalletConfig::from_env`] reads `.env` (via `dotenvy`) and the process environment.
//! - Browser build: values are baked in at compile time and fed through [`WalletConfig::from_lookup`].
//!
//! Unset keys fall back to the defaults of the selected network (testnet unless
//! `STELLAR_NETWORK` says otherwise).
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config, WalletConfig};
//!
//! init_config(WalletConfig::default()).unwrap();
//! let horizon = &core_config().horizon_url;
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use shared::NetworkType;

use crate::error::{AppError, Result};

pub const ENV_NETWORK: &str = "STELLAR_NETWORK";
pub const ENV_HORIZON_URL: &str = "HORIZON_URL";
pub const ENV_NETWORK_PASSPHRASE: &str = "NETWORK_PASSPHRASE";
pub const ENV_EXPLORER_URL: &str = "EXPLORER_URL";
pub const ENV_REFRESH_DELAY_MS: &str = "REFRESH_DELAY_MS";
pub const ENV_HISTORY_LIMIT: &str = "HISTORY_LIMIT";
pub const ENV_MAX_PAYMENT_AMOUNT: &str = "MAX_PAYMENT_AMOUNT";

const DEFAULT_EXPLORER_URL: &str = "https://stellar.expert/explorer";
const DEFAULT_REFRESH_DELAY_MS: u64 = 1000;
const DEFAULT_HISTORY_LIMIT: usize = 10;
const DEFAULT_MAX_PAYMENT_AMOUNT: f64 = 10_000.0;

/// Horizon caps `limit` at 200 records per page.
const HORIZON_MAX_PAGE: usize = 200;

/// Wallet configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct WalletConfig {
    pub network: NetworkType,

    /// Horizon REST endpoint
    pub horizon_url: String,

    /// Passphrase the wallet signs against
    pub network_passphrase: String,

    /// stellar.expert base; the network segment is appended per link
    pub explorer_url: String,

    /// Wait between a successful payment and the coordinated panel refresh.
    ///
    /// A heuristic for ledger propagation, not an acknowledgement.
    pub refresh_delay_ms: u64,

    /// Records fetched per history load
    pub history_limit: usize,

    /// Upper bound accepted by the payment form, in XLM
    pub max_payment_amount: f64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self::for_network(NetworkType::Testnet)
    }
}

impl WalletConfig {
    /// Defaults for `network`.
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            horizon_url: network.horizon_url().to_string(),
            network_passphrase: network.passphrase().to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_payment_amount: DEFAULT_MAX_PAYMENT_AMOUNT,
        }
    }

    /// Build a config from a key lookup, then validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let network = match lookup(ENV_NETWORK) {
            Some(value) => value.parse::<NetworkType>().map_err(AppError::Config)?,
            None => NetworkType::default(),
        };
        let mut config = Self::for_network(network);

        if let Some(url) = lookup(ENV_HORIZON_URL) {
            config.horizon_url = url.trim_end_matches('/').to_string();
        }
        if let Some(passphrase) = lookup(ENV_NETWORK_PASSPHRASE) {
            config.network_passphrase = passphrase;
        }
        if let Some(url) = lookup(ENV_EXPLORER_URL) {
            config.explorer_url = url.trim_end_matches('/').to_string();
        }
        if let Some(value) = lookup(ENV_REFRESH_DELAY_MS) {
            config.refresh_delay_ms = parse_number(ENV_REFRESH_DELAY_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_HISTORY_LIMIT) {
            config.history_limit = parse_number(ENV_HISTORY_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_PAYMENT_AMOUNT) {
            config.max_payment_amount = parse_number(ENV_MAX_PAYMENT_AMOUNT, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `.env` and environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; real env vars still apply
        let _ = dotenvy::dotenv();
        Self::from_lookup(lib_utils::lookup_env)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.horizon_url.starts_with("https://") || self.horizon_url.starts_with("http://")) {
            return Err(AppError::Config(format!(
                "{} must be an http(s) URL, got {:?}",
                ENV_HORIZON_URL, self.horizon_url
            )));
        }

        if self.network_passphrase.trim().is_empty() {
            return Err(AppError::Config(format!("{} cannot be empty", ENV_NETWORK_PASSPHRASE)));
        }

        if self.explorer_url.trim().is_empty() {
            return Err(AppError::Config(format!("{} cannot be empty", ENV_EXPLORER_URL)));
        }

        if self.refresh_delay_ms == 0 || self.refresh_delay_ms > 60_000 {
            return Err(AppError::Config(format!(
                "{} must be between 1 and 60000",
                ENV_REFRESH_DELAY_MS
            )));
        }

        if self.history_limit == 0 || self.history_limit > HORIZON_MAX_PAGE {
            return Err(AppError::Config(format!(
                "{} must be between 1 and {}",
                ENV_HISTORY_LIMIT, HORIZON_MAX_PAGE
            )));
        }

        if !self.max_payment_amount.is_finite() || self.max_payment_amount <= 0.0 {
            return Err(AppError::Config(format!(
                "{} must be a positive number",
                ENV_MAX_PAYMENT_AMOUNT
            )));
        }

        Ok(())
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Explorer root for the configured network, e.g. `https://stellar.expert/explorer/testnet`.
    pub fn explorer_base(&self) -> String {
        format!("{}/{}", self.explorer_url, self.network.explorer_segment())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a valid number, got {:?}", key, value)))
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<WalletConfig> = OnceLock::new();

/// Validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if validation fails or a config was already installed.
pub fn init_config(config: WalletConfig) -> Result<()> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static WalletConfig {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_testnet() {
        let config = WalletConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.network, NetworkType::Testnet);
        assert_eq!(config.horizon_url, "https://horizon-testnet.stellar.org");
        assert_eq!(config.network_passphrase, "Test SDF Network ; September 2015");
        assert_eq!(config.refresh_delay(), Duration::from_secs(1));
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.max_payment_amount, 10_000.0);
        assert_eq!(config.explorer_base(), "https://stellar.expert/explorer/testnet");
    }

    #[test]
    fn test_overrides_apply() {
        let config = WalletConfig::from_lookup(lookup_from(&[
            (ENV_NETWORK, "mainnet"),
            (ENV_HORIZON_URL, "http://localhost:8000/"),
            (ENV_REFRESH_DELAY_MS, "2500"),
            (ENV_HISTORY_LIMIT, "25"),
        ]))
        .unwrap();
        assert_eq!(config.network, NetworkType::Mainnet);
        assert_eq!(config.horizon_url, "http://localhost:8000");
        assert_eq!(config.network_passphrase, "Public Global Stellar Network ; September 2015");
        assert_eq!(config.refresh_delay_ms, 2500);
        assert_eq!(config.history_limit, 25);
        assert_eq!(config.explorer_base(), "https://stellar.expert/explorer/public");
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases: &[(&str, &str)] = &[
            (ENV_NETWORK, "futurenet"),
            (ENV_REFRESH_DELAY_MS, "0"),
            (ENV_REFRESH_DELAY_MS, "soon"),
            (ENV_HISTORY_LIMIT, "0"),
            (ENV_HISTORY_LIMIT, "500"),
            (ENV_HORIZON_URL, "horizon-testnet.stellar.org"),
            (ENV_MAX_PAYMENT_AMOUNT, "-5"),
        ];
        for (key, value) in cases {
            let result = WalletConfig::from_lookup(lookup_from(&[(key, value)]));
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "{}={} was accepted",
                key,
                value
            );
        }
    }
}
