//! Wallet state management
//!
//! Bridges the core `Shell` into Leptos: every component's state cell is
//! mirrored into a signal, and user actions are forwarded to the Shell on the
//! browser event loop.

use std::sync::Arc;

use leptos::prelude::*;
use lib_core::model::{BalanceState, HistoryRow, HistoryState, TransactionFormState};
use lib_core::{ConnectionState, Shell, WalletConfig};
use shared::ExplorerKind;

use crate::services::{BrowserFacade, BrowserScheduler};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    shell: StoredValue<Arc<Shell>>,
    pub connection: RwSignal<ConnectionState>,
    pub balance: RwSignal<BalanceState>,
    pub history: RwSignal<HistoryState>,
    pub form: RwSignal<TransactionFormState>,
}

impl WalletContext {
    pub fn new(config: &WalletConfig) -> Self {
        let shell = Arc::new(Shell::new(
            Arc::new(BrowserFacade::new(config.clone())),
            Arc::new(BrowserScheduler),
            config,
        ));

        let connection = RwSignal::new(shell.connection());
        let balance = RwSignal::new(shell.balance().state());
        let history = RwSignal::new(shell.history().state());
        let form = RwSignal::new(shell.form().state());

        shell.subscribe_connection(move |state| connection.set(state.clone()));
        shell.balance().subscribe(move |state| balance.set(state.clone()));
        shell.history().subscribe(move |state| history.set(state.clone()));
        shell.form().subscribe(move |state| form.set(state.clone()));

        Self {
            shell: StoredValue::new(shell),
            connection,
            balance,
            history,
            form,
        }
    }

    fn shell(&self) -> Arc<Shell> {
        self.shell.get_value()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.with(|state| state.address().is_some())
    }

    pub fn address(&self) -> Option<String> {
        self.connection.with(|state| state.address().map(str::to_string))
    }

    /// Connect through Freighter. Failures interrupt the user with an alert.
    pub fn connect(&self) {
        let shell = self.shell();
        leptos::task::spawn_local(async move {
            if let Err(err) = shell.connect().await {
                log::error!("Connection error: {}", err);
                alert(&format!("Failed to connect wallet:\n{}", err.message()));
            }
        });
    }

    pub fn disconnect(&self) {
        self.shell().disconnect();
    }

    pub fn refresh_balance(&self) {
        let shell = self.shell();
        leptos::task::spawn_local(async move { shell.balance().refresh().await });
    }

    pub fn refresh_history(&self) {
        let shell = self.shell();
        leptos::task::spawn_local(async move { shell.history().refresh().await });
    }

    pub fn set_recipient(&self, value: String) {
        self.shell().form().set_recipient(value);
    }

    pub fn set_amount(&self, value: String) {
        self.shell().form().set_amount(value);
    }

    pub fn set_memo(&self, value: String) {
        self.shell().form().set_memo(value);
    }

    pub fn can_submit(&self) -> bool {
        let connected = self.is_connected();
        // track the form signal so the button re-renders on input
        self.form.track();
        self.shell().form().can_submit(connected)
    }

    pub fn submit_payment(&self) {
        let shell = self.shell();
        leptos::task::spawn_local(async move {
            shell.submit_payment().await;
        });
    }

    pub fn retry_payment(&self) {
        let shell = self.shell();
        leptos::task::spawn_local(async move {
            shell.retry_payment().await;
        });
    }

    pub fn reset_payment(&self) {
        self.shell().reset_payment();
    }

    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history.track();
        self.shell().history().rows()
    }

    pub fn explorer_link(&self, id: &str, kind: ExplorerKind) -> String {
        self.shell().explorer_link(id, kind)
    }

    pub fn format_address(&self, address: &str) -> String {
        self.shell().format_address(address)
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn provide_wallet_context(config: &WalletConfig) -> WalletContext {
    let context = WalletContext::new(config);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
