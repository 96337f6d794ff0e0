//! History Panel: recent ledger activity of the connected account.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{format_amount, Direction, ExplorerKind, TransactionRecord};

use crate::error::Result;
use crate::facade::LedgerFacade;
use crate::model::panel::{AddressBoundPanel, PanelSource, PanelState};

pub struct HistorySource {
    facade: Arc<dyn LedgerFacade>,
    limit: usize,
}

#[async_trait(?Send)]
impl PanelSource for HistorySource {
    type Data = Vec<TransactionRecord>;

    const NAME: &'static str = "history";

    fn placeholder(&self) -> Vec<TransactionRecord> {
        Vec::new()
    }

    async fn fetch(&self, address: &str) -> Result<Vec<TransactionRecord>> {
        self.facade.get_recent_transactions(address, self.limit).await
    }
}

/// Newest-first list, replaced wholesale on every load.
pub type HistoryPanel = AddressBoundPanel<HistorySource>;

pub type HistoryState = PanelState<Vec<TransactionRecord>>;

impl AddressBoundPanel<HistorySource> {
    pub fn new(facade: Arc<dyn LedgerFacade>, limit: usize) -> Self {
        Self::with_source(HistorySource { facade, limit })
    }

    /// Display rows for the current records, relative to the bound address.
    pub fn rows(&self) -> Vec<HistoryRow> {
        let state = self.state();
        let owner = state.address.unwrap_or_default();
        state
            .data
            .iter()
            .map(|record| HistoryRow::new(record, &owner, self.source().facade.as_ref()))
            .collect()
    }
}

/// One rendered history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub id: String,
    pub direction: Direction,
    /// Signed, grouped amount, e.g. `-1,250.50`; `+0` for records without one
    pub amount: String,
    pub asset: String,
    /// `"To"` for sent records, `"From"` otherwise
    pub counterparty_label: &'static str,
    pub counterparty: String,
    pub timestamp: String,
    pub hash: String,
    pub explorer_url: String,
}

impl HistoryRow {
    pub fn new(record: &TransactionRecord, owner: &str, facade: &dyn LedgerFacade) -> Self {
        let direction = record.direction(owner);
        let amount = match record.amount.as_deref() {
            Some(a) => format!("{}{}", direction.sign(), format_amount(a)),
            None => format!("{}0", direction.sign()),
        };
        let counterparty_label = match direction {
            Direction::Sent => "To",
            Direction::Received => "From",
        };

        Self {
            id: record.id.clone(),
            direction,
            amount,
            asset: record.asset_code().to_string(),
            counterparty_label,
            counterparty: facade.format_address(record.counterparty(owner)),
            timestamp: lib_utils::format_timestamp(&record.created_at),
            hash: record.hash.clone(),
            explorer_url: facade.explorer_link(&record.hash, ExplorerKind::Transaction),
        }
    }
}
