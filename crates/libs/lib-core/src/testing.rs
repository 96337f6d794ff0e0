//! Scripted facade double for component tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::channel::oneshot;
use parking_lot::Mutex;
use shared::{BalanceDto, ExplorerKind, PaymentRequest, PaymentResult, TransactionRecord};

use crate::error::{AppError, Result};
use crate::facade::LedgerFacade;

pub const ALICE: &str = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
pub const BOB: &str = "GBRPYHIL2CI3FNQ4BXLFMNDLFJUNPU2HY3ZMFSHONUCEOASW7QC7OX2H";

enum Scripted<T> {
    Ready(Result<T>),
    Pending(oneshot::Receiver<Result<T>>),
}

impl<T> Scripted<T> {
    async fn resolve(self) -> Result<T> {
        match self {
            Scripted::Ready(result) => result,
            Scripted::Pending(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AppError::Fetch("scripted response dropped".into()))),
        }
    }
}

struct Script<T> {
    queue: Mutex<VecDeque<Scripted<T>>>,
    calls: AtomicUsize,
}

impl<T> Script<T> {
    fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    fn push(&self, result: Result<T>) {
        self.queue.lock().push_back(Scripted::Ready(result));
    }

    fn pending(&self) -> oneshot::Sender<Result<T>> {
        let (tx, rx) = oneshot::channel();
        self.queue.lock().push_back(Scripted::Pending(rx));
        tx
    }

    /// Next scripted response, or `fallback` when the script ran out.
    async fn next(&self, fallback: impl FnOnce() -> Result<T>) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.queue.lock().pop_front();
        match scripted {
            Some(scripted) => scripted.resolve().await,
            None => fallback(),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Facade whose responses are queued up front by the test.
///
/// Unscripted calls succeed: connect yields [`ALICE`], balance `"100.0000000"`,
/// history is empty and payments succeed with hash `"H"`.
pub struct MockFacade {
    connects: Script<String>,
    balances: Script<BalanceDto>,
    histories: Script<Vec<TransactionRecord>>,
    payments: Script<PaymentResult>,
    disconnects: AtomicUsize,
    last_payment: Mutex<Option<PaymentRequest>>,
    history_limits: Mutex<Vec<usize>>,
}

impl MockFacade {
    pub fn new() -> Self {
        Self {
            connects: Script::new(),
            balances: Script::new(),
            histories: Script::new(),
            payments: Script::new(),
            disconnects: AtomicUsize::new(0),
            last_payment: Mutex::new(None),
            history_limits: Mutex::new(Vec::new()),
        }
    }

    pub fn push_connect(&self, result: Result<String>) {
        self.connects.push(result);
    }

    pub fn push_balance(&self, result: Result<&str>) {
        self.balances.push(result.map(|xlm| BalanceDto { xlm: xlm.to_string() }));
    }

    pub fn pending_balance(&self) -> oneshot::Sender<Result<BalanceDto>> {
        self.balances.pending()
    }

    pub fn push_history(&self, result: Result<Vec<TransactionRecord>>) {
        self.histories.push(result);
    }

    pub fn push_payment(&self, result: Result<PaymentResult>) {
        self.payments.push(result);
    }

    pub fn pending_payment(&self) -> oneshot::Sender<Result<PaymentResult>> {
        self.payments.pending()
    }

    pub fn connect_calls(&self) -> usize {
        self.connects.calls()
    }

    pub fn balance_calls(&self) -> usize {
        self.balances.calls()
    }

    pub fn history_calls(&self) -> usize {
        self.histories.calls()
    }

    pub fn payment_calls(&self) -> usize {
        self.payments.calls()
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnects.load(Ordering::SeqCst)
    }

    pub fn last_payment(&self) -> Option<PaymentRequest> {
        self.last_payment.lock().clone()
    }

    pub fn history_limits(&self) -> Vec<usize> {
        self.history_limits.lock().clone()
    }
}

#[async_trait(?Send)]
impl LedgerFacade for MockFacade {
    async fn connect_wallet(&self) -> Result<String> {
        self.connects.next(|| Ok(ALICE.to_string())).await
    }

    fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }

    async fn get_balance(&self, _address: &str) -> Result<BalanceDto> {
        self.balances
            .next(|| Ok(BalanceDto { xlm: "100.0000000".to_string() }))
            .await
    }

    async fn get_recent_transactions(
        &self,
        _address: &str,
        limit: usize,
    ) -> Result<Vec<TransactionRecord>> {
        self.history_limits.lock().push(limit);
        self.histories.next(|| Ok(Vec::new())).await
    }

    async fn send_payment(&self, request: PaymentRequest) -> Result<PaymentResult> {
        *self.last_payment.lock() = Some(request);
        self.payments
            .next(|| {
                Ok(PaymentResult {
                    success: true,
                    hash: Some("H".to_string()),
                })
            })
            .await
    }

    fn explorer_link(&self, id: &str, kind: ExplorerKind) -> String {
        format!("https://stellar.expert/explorer/testnet/{}/{}", kind.path_segment(), id)
    }
}

pub fn record(id: &str, from: &str, to: &str) -> TransactionRecord {
    TransactionRecord {
        id: id.to_string(),
        kind: "payment".to_string(),
        amount: Some("12.5000000".to_string()),
        asset: None,
        from: Some(from.to_string()),
        to: Some(to.to_string()),
        created_at: "2025-03-01T12:00:00Z".to_string(),
        hash: format!("hash-{}", id),
    }
}
