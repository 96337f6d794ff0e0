//! Balance Panel: native balance of the connected account.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::facade::LedgerFacade;
use crate::model::panel::{AddressBoundPanel, PanelSource, PanelState};

/// Shown until the first successful fetch.
pub const BALANCE_PLACEHOLDER: &str = "0";

pub struct BalanceSource {
    facade: Arc<dyn LedgerFacade>,
}

#[async_trait(?Send)]
impl PanelSource for BalanceSource {
    type Data = String;

    const NAME: &'static str = "balance";

    fn placeholder(&self) -> String {
        BALANCE_PLACEHOLDER.to_string()
    }

    async fn fetch(&self, address: &str) -> Result<String> {
        Ok(self.facade.get_balance(address).await?.xlm)
    }
}

/// Balance as the decimal string the ledger reports.
pub type BalancePanel = AddressBoundPanel<BalanceSource>;

pub type BalanceState = PanelState<String>;

impl AddressBoundPanel<BalanceSource> {
    pub fn new(facade: Arc<dyn LedgerFacade>) -> Self {
        Self::with_source(BalanceSource { facade })
    }

    pub fn balance(&self) -> String {
        self.state().data
    }
}
