//! Browser implementation of the ledger facade: Freighter for keys and
//! signatures, Horizon for everything on-ledger.

use async_trait::async_trait;
use lib_core::{AppError, LedgerFacade, Result, WalletConfig};
use lib_stellar::HorizonClient;
use log::{info, warn};
use shared::{BalanceDto, ExplorerKind, PaymentRequest, PaymentResult, TransactionRecord};

use crate::services::freighter;

pub struct BrowserFacade {
    horizon: HorizonClient,
    config: WalletConfig,
}

impl BrowserFacade {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            horizon: HorizonClient::from_config(&config),
            config,
        }
    }
}

#[async_trait(?Send)]
impl LedgerFacade for BrowserFacade {
    async fn connect_wallet(&self) -> Result<String> {
        if !freighter::is_available() {
            return Err(AppError::Connection(
                "Freighter wallet not found. Please install the Freighter extension.".to_string(),
            ));
        }
        let address = freighter::request_access().await.map_err(AppError::Connection)?;
        info!("Freighter granted access for {}", address);
        Ok(address)
    }

    fn disconnect(&self) {
        // Freighter keeps its own session; nothing to revoke from the page
        info!("Session cleared");
    }

    async fn get_balance(&self, address: &str) -> Result<BalanceDto> {
        let xlm = self
            .horizon
            .get_native_balance(address)
            .await
            .map_err(lib_stellar::Error::into_fetch)?;
        Ok(BalanceDto { xlm })
    }

    async fn get_recent_transactions(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>> {
        self.horizon
            .get_payments(address, limit)
            .await
            .map_err(lib_stellar::Error::into_fetch)
    }

    async fn send_payment(&self, request: PaymentRequest) -> Result<PaymentResult> {
        let passphrase = &self.config.network_passphrase;

        let unsigned = freighter::build_payment(
            &self.config.horizon_url,
            passphrase,
            &request.from,
            &request.to,
            &request.amount,
            request.memo.clone(),
        )
        .await
        .map_err(AppError::Submission)?;

        let signed = freighter::sign_transaction(&unsigned, passphrase)
            .await
            .map_err(AppError::Submission)?;

        match self.horizon.submit_transaction(&signed).await {
            Ok(hash) => {
                info!("Payment of {} XLM submitted: {}", request.amount, hash);
                Ok(PaymentResult {
                    success: true,
                    hash: Some(hash),
                })
            }
            Err(err) => {
                warn!("Submission failed: {}", err);
                Err(err.into_submission())
            }
        }
    }

    fn explorer_link(&self, id: &str, kind: ExplorerKind) -> String {
        lib_stellar::explorer_link(&self.config.explorer_url, self.config.network, id, kind)
    }
}
