//! # Shell
//!
//! Page-level composer. Holds the connected address, binds it into the Balance
//! and History panels, and forwards payments to the Transaction Form.
//!
//! After every successful payment the Shell schedules exactly one refresh of
//! both panels, `refresh_delay` later. The delay gives Horizon time to ingest
//! the new ledger; it is not an acknowledgement, so a slow ledger can still be
//! missed by that refresh.

use std::sync::Arc;
use std::time::Duration;

use shared::ExplorerKind;
use tracing::{info, warn};

use crate::config::WalletConfig;
use crate::error::Result;
use crate::facade::LedgerFacade;
use crate::model::balance::BalancePanel;
use crate::model::history::HistoryPanel;
use crate::model::observable::{Observable, SubscriptionId};
use crate::model::transaction::{TransactionForm, TransactionLifecycle};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected(String),
}

impl ConnectionState {
    pub fn address(&self) -> Option<&str> {
        match self {
            ConnectionState::Connected(address) => Some(address),
            _ => None,
        }
    }

    pub fn is_connecting(&self) -> bool {
        matches!(self, ConnectionState::Connecting)
    }
}

pub struct Shell {
    facade: Arc<dyn LedgerFacade>,
    connection: Observable<ConnectionState>,
    balance: Arc<BalancePanel>,
    history: Arc<HistoryPanel>,
    form: Arc<TransactionForm>,
}

impl Shell {
    pub fn new(
        facade: Arc<dyn LedgerFacade>,
        scheduler: Arc<dyn Scheduler>,
        config: &WalletConfig,
    ) -> Self {
        let balance = Arc::new(BalancePanel::new(facade.clone()));
        let history = Arc::new(HistoryPanel::new(facade.clone(), config.history_limit));
        let form = Arc::new(TransactionForm::new(
            facade.clone(),
            config.max_payment_amount,
        ));

        register_coordinated_refresh(
            &form,
            balance.clone(),
            history.clone(),
            scheduler,
            config.refresh_delay(),
        );

        Self {
            facade,
            connection: Observable::default(),
            balance,
            history,
            form,
        }
    }

    pub fn balance(&self) -> &Arc<BalancePanel> {
        &self.balance
    }

    pub fn history(&self) -> &Arc<HistoryPanel> {
        &self.history
    }

    pub fn form(&self) -> &Arc<TransactionForm> {
        &self.form
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection.get()
    }

    pub fn address(&self) -> Option<String> {
        self.connection.with(|c| c.address().map(str::to_string))
    }

    pub fn subscribe_connection(
        &self,
        listener: impl Fn(&ConnectionState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.connection.subscribe(listener)
    }

    /// Connect the wallet and load both panels for the returned address.
    ///
    /// On failure the state returns to `Disconnected` and the error is handed
    /// back unchanged, for the caller to show as a blocking alert.
    pub async fn connect(&self) -> Result<String> {
        self.connection.set(ConnectionState::Connecting);

        match self.facade.connect_wallet().await {
            Ok(address) => {
                info!(%address, "wallet connected");
                self.connection.set(ConnectionState::Connected(address.clone()));
                futures::join!(
                    self.balance.rebind(Some(&address)),
                    self.history.rebind(Some(&address)),
                );
                Ok(address)
            }
            Err(err) => {
                warn!("wallet connection failed: {}", err);
                self.connection.set(ConnectionState::Disconnected);
                self.balance.unbind();
                self.history.unbind();
                Err(err)
            }
        }
    }

    /// Drop the session. The transaction form keeps whatever state it is in.
    pub fn disconnect(&self) {
        self.facade.disconnect();
        self.connection.set(ConnectionState::Disconnected);
        self.balance.unbind();
        self.history.unbind();
        info!("wallet disconnected");
    }

    pub async fn submit_payment(&self) -> TransactionLifecycle {
        let address = self.address();
        self.form.submit(address.as_deref()).await
    }

    pub async fn retry_payment(&self) -> TransactionLifecycle {
        let address = self.address();
        self.form.retry(address.as_deref()).await
    }

    pub fn reset_payment(&self) {
        self.form.reset();
    }

    pub fn explorer_link(&self, id: &str, kind: ExplorerKind) -> String {
        self.facade.explorer_link(id, kind)
    }

    pub fn format_address(&self, address: &str) -> String {
        self.facade.format_address(address)
    }
}

fn register_coordinated_refresh(
    form: &TransactionForm,
    balance: Arc<BalancePanel>,
    history: Arc<HistoryPanel>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
) {
    form.on_success(move |_| {
        let balance = balance.clone();
        let history = history.clone();
        scheduler.schedule(
            delay,
            Box::pin(async move {
                futures::join!(balance.refresh(), history.refresh());
            }),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::BALANCE_PLACEHOLDER;
    use crate::scheduler::TokioScheduler;
    use crate::testing::{MockFacade, ALICE, BOB};
    use tokio::task::LocalSet;

    fn shell() -> (Arc<MockFacade>, Arc<Shell>) {
        let facade = Arc::new(MockFacade::new());
        let shell = Shell::new(
            facade.clone(),
            Arc::new(TokioScheduler),
            &WalletConfig::default(),
        );
        (facade, Arc::new(shell))
    }

    #[tokio::test]
    async fn test_connect_binds_and_loads_panels() {
        let (facade, shell) = shell();
        facade.push_balance(Ok("55.0000000"));

        let address = shell.connect().await.unwrap();

        assert_eq!(address, ALICE);
        assert_eq!(shell.connection(), ConnectionState::Connected(ALICE.to_string()));
        assert_eq!(shell.balance().balance(), "55.0000000");
        assert_eq!(shell.history().address().as_deref(), Some(ALICE));
        assert_eq!(facade.balance_calls(), 1);
        assert_eq!(facade.history_limits(), vec![10]);
    }

    #[tokio::test]
    async fn test_connect_failure_is_returned_verbatim() {
        let (facade, shell) = shell();
        facade.push_connect(Err(AppError::Connection(
            "Freighter wallet not found. Please install it.".into(),
        )));

        let err = shell.connect().await.unwrap_err();

        assert_eq!(err.message(), "Freighter wallet not found. Please install it.");
        assert!(err.is_blocking());
        assert_eq!(shell.connection(), ConnectionState::Disconnected);
        assert_eq!(facade.balance_calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_reconnect_unbinds_panels() {
        let (facade, shell) = shell();
        shell.connect().await.unwrap();
        assert_eq!(shell.balance().address().as_deref(), Some(ALICE));

        facade.push_connect(Err(AppError::Connection("User declined access".into())));
        assert!(shell.connect().await.is_err());

        assert_eq!(facade.connect_calls(), 2);
        assert_eq!(shell.connection(), ConnectionState::Disconnected);
        assert_eq!(shell.balance().address(), None);
        assert_eq!(shell.balance().balance(), BALANCE_PLACEHOLDER);
        assert_eq!(shell.history().address(), None);
        assert!(shell.history().state().data.is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_clears_address_but_not_form() {
        let (facade, shell) = shell();
        shell.connect().await.unwrap();

        facade.push_payment(Err(AppError::Submission("tx_failed".into())));
        shell.form().set_recipient(BOB);
        shell.form().set_amount("1");
        shell.submit_payment().await;

        shell.disconnect();

        assert_eq!(shell.address(), None);
        assert_eq!(shell.balance().address(), None);
        assert_eq!(shell.history().state().data, Vec::new());
        assert_eq!(facade.disconnect_calls(), 1);
        assert_eq!(shell.form().lifecycle().error_message(), Some("tx_failed"));
    }

    #[tokio::test]
    async fn test_submit_while_disconnected_is_a_validation_error() {
        let (facade, shell) = shell();
        shell.form().set_recipient(BOB);
        shell.form().set_amount("1");

        let lifecycle = shell.submit_payment().await;

        assert!(matches!(
            lifecycle,
            TransactionLifecycle::Error { error: AppError::Validation(_) }
        ));
        assert_eq!(facade.payment_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_refreshes_both_panels_once_after_delay() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let (facade, shell) = shell();
                shell.connect().await.unwrap();
                assert_eq!((facade.balance_calls(), facade.history_calls()), (1, 1));

                // a manual refresh still in flight does not suppress the scheduled one
                let _slow = facade.pending_balance();
                let s = shell.clone();
                tokio::task::spawn_local(async move { s.balance().refresh().await });
                tokio::task::yield_now().await;
                assert!(shell.balance().state().loading);
                assert_eq!(facade.balance_calls(), 2);

                facade.push_balance(Ok("90.0000000"));
                shell.form().set_recipient(BOB);
                shell.form().set_amount("10");
                let lifecycle = shell.submit_payment().await;
                assert!(matches!(lifecycle, TransactionLifecycle::Success { .. }));

                tokio::time::sleep(Duration::from_millis(999)).await;
                assert_eq!((facade.balance_calls(), facade.history_calls()), (2, 1));

                tokio::time::sleep(Duration::from_millis(2)).await;
                tokio::task::yield_now().await;
                assert_eq!((facade.balance_calls(), facade.history_calls()), (3, 2));
                assert_eq!(shell.balance().balance(), "90.0000000");

                tokio::time::sleep(Duration::from_secs(10)).await;
                assert_eq!((facade.balance_calls(), facade.history_calls()), (3, 2));
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submission_schedules_nothing() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let (facade, shell) = shell();
                shell.connect().await.unwrap();
                facade.push_payment(Err(AppError::Submission("op_underfunded".into())));
                shell.form().set_recipient(BOB);
                shell.form().set_amount("10");
                shell.submit_payment().await;

                tokio::time::sleep(Duration::from_secs(5)).await;
                assert_eq!((facade.balance_calls(), facade.history_calls()), (1, 1));
            })
            .await;
    }

    #[tokio::test]
    async fn test_helpers_delegate_to_facade() {
        let (_facade, shell) = shell();
        assert_eq!(shell.format_address(ALICE), "GAAZ...CWN7");
        assert_eq!(
            shell.explorer_link("abc", ExplorerKind::Transaction),
            "https://stellar.expert/explorer/testnet/tx/abc"
        );
    }
}
