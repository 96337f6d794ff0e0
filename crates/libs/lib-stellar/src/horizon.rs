//! # Horizon Client
//!
//! Thin REST client over the three Horizon endpoints the wallet needs.

use lib_core::WalletConfig;
use reqwest::{Client, Response, StatusCode};
use shared::TransactionRecord;
use tracing::{debug, error, instrument};

use crate::error::{Error, Result};
use crate::types::{AccountResponse, OperationsResponse, Problem, SubmitResponse};

pub struct HorizonClient {
    client: Client,
    base_url: String,
}

impl HorizonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &WalletConfig) -> Self {
        Self::new(config.horizon_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Native balance of `address` as Horizon reports it (7 fraction digits).
    #[instrument(skip(self))]
    pub async fn get_native_balance(&self, address: &str) -> Result<String> {
        let url = format!("{}/accounts/{}", self.base_url, address);
        debug!("Fetching account from: {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::AccountNotFound(address.to_string()));
        }
        let response = ensure_success(response).await?;

        let account: AccountResponse = response.json().await?;
        Ok(account.native_balance().unwrap_or("0").to_string())
    }

    /// Most recent payment-like operations touching `address`, newest first.
    #[instrument(skip(self))]
    pub async fn get_payments(&self, address: &str, limit: usize) -> Result<Vec<TransactionRecord>> {
        let url = format!(
            "{}/accounts/{}/payments?order=desc&limit={}",
            self.base_url, address, limit
        );
        debug!("Fetching payments from: {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::AccountNotFound(address.to_string()));
        }
        let response = ensure_success(response).await?;

        let page: OperationsResponse = response.json().await?;
        Ok(page.embedded.records.into_iter().map(Into::into).collect())
    }

    /// Submit a signed transaction envelope (base64 XDR). Returns the hash.
    #[instrument(skip(self, envelope_xdr))]
    pub async fn submit_transaction(&self, envelope_xdr: &str) -> Result<String> {
        let url = format!("{}/transactions", self.base_url);
        debug!("Submitting transaction to: {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[("tx", envelope_xdr)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let problem = read_problem(response).await;
            error!("Horizon rejected transaction: {} {:?}", status, problem.result_codes());
            return Err(match problem.result_codes() {
                Some(codes) => Error::Rejected(codes),
                None => Error::Api {
                    status: status.as_u16(),
                    detail: problem.summary(),
                },
            });
        }

        let submitted: SubmitResponse = response.json().await?;
        if !submitted.successful {
            return Err(Error::Rejected(format!("transaction {} not successful", submitted.hash)));
        }
        Ok(submitted.hash)
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    error!("Horizon API error: {}", status);
    let problem = read_problem(response).await;
    Err(Error::Api {
        status: status.as_u16(),
        detail: problem.summary(),
    })
}

async fn read_problem(response: Response) -> Problem {
    match response.text().await {
        Ok(body) => serde_json::from_str(&body).unwrap_or_default(),
        Err(_) => Problem::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = HorizonClient::new("https://horizon-testnet.stellar.org/");
        assert_eq!(client.base_url(), "https://horizon-testnet.stellar.org");

        let client = HorizonClient::from_config(&WalletConfig::default());
        assert_eq!(client.base_url(), "https://horizon-testnet.stellar.org");
    }
}
