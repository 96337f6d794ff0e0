//! # Transaction Form
//!
//! Owns the payment input fields and the submission lifecycle:
//!
//! ```text
//!            validation fails
//!   Idle ─────────────────────────────► Error ──retry──► (validate again)
//!    │  validation passes                 ▲   └─reset──► Idle (fields kept)
//!    ▼                                    │
//!  Sending ──facade error / success:false─┘
//!    │
//!    └─success:true──► Success ──reset──► Idle (fields already cleared)
//! ```
//!
//! Validation always runs before the facade is called. There is no timeout,
//! automatic retry or idempotency key: a retry after an ambiguous failure can
//! submit the same payment twice.

use std::sync::Arc;

use parking_lot::RwLock;
use shared::{PaymentRequest, PaymentResult};
use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::facade::LedgerFacade;
use crate::model::observable::{Observable, SubscriptionId};

pub const SUCCESS_MESSAGE: &str = "Transaction sent successfully!";
pub const REJECTED_MESSAGE: &str = "Transaction failed. Please try again.";
pub const FAILURE_FALLBACK_MESSAGE: &str =
    "Transaction failed. Please check your balance and try again.";
pub const NOT_CONNECTED_MESSAGE: &str = "Connect a wallet before sending.";

/// Raw text of the three inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFields {
    pub recipient: String,
    pub amount: String,
    pub memo: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TransactionLifecycle {
    #[default]
    Idle,
    Sending,
    Success {
        hash: Option<String>,
        message: String,
    },
    Error {
        error: AppError,
    },
}

impl TransactionLifecycle {
    pub fn is_sending(&self) -> bool {
        matches!(self, TransactionLifecycle::Sending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            TransactionLifecycle::Error { error } => Some(error.message()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFormState {
    pub fields: PaymentFields,
    pub lifecycle: TransactionLifecycle,
}

type SuccessHook = Arc<dyn Fn(&PaymentResult) + Send + Sync>;

pub struct TransactionForm {
    facade: Arc<dyn LedgerFacade>,
    max_amount: f64,
    state: Observable<TransactionFormState>,
    on_success: RwLock<Option<SuccessHook>>,
}

impl TransactionForm {
    /// `max_amount` is the largest payment accepted, in XLM.
    pub fn new(facade: Arc<dyn LedgerFacade>, max_amount: f64) -> Self {
        Self {
            facade,
            max_amount,
            state: Observable::default(),
            on_success: RwLock::new(None),
        }
    }

    pub fn state(&self) -> TransactionFormState {
        self.state.get()
    }

    pub fn lifecycle(&self) -> TransactionLifecycle {
        self.state.with(|s| s.lifecycle.clone())
    }

    pub fn fields(&self) -> PaymentFields {
        self.state.with(|s| s.fields.clone())
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&TransactionFormState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.state.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id)
    }

    /// Register the callback run after every successful submission.
    /// Replaces any previous hook.
    pub fn on_success(&self, hook: impl Fn(&PaymentResult) + Send + Sync + 'static) {
        *self.on_success.write() = Some(Arc::new(hook));
    }

    pub fn set_recipient(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|s| s.fields.recipient = value);
    }

    pub fn set_amount(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|s| s.fields.amount = value);
    }

    pub fn set_memo(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.update(|s| s.fields.memo = value);
    }

    /// Whether the send button should be enabled.
    pub fn can_submit(&self, connected: bool) -> bool {
        self.state.with(|s| {
            connected
                && !s.lifecycle.is_sending()
                && !s.fields.recipient.trim().is_empty()
                && !s.fields.amount.trim().is_empty()
        })
    }

    /// Validate the fields and send the payment from `from`.
    ///
    /// Ignored while a submission is already in flight. Returns the lifecycle
    /// the form ends up in.
    pub async fn submit(&self, from: Option<&str>) -> TransactionLifecycle {
        let request = {
            let state = self.state.get();
            if state.lifecycle.is_sending() {
                return state.lifecycle;
            }
            self.build_request(from, &state.fields)
        };

        let request = match request {
            Ok(request) => request,
            Err(error) => {
                warn!("payment rejected before submission: {}", error);
                return self.finish(TransactionLifecycle::Error { error }, false);
            }
        };

        self.state.update(|s| s.lifecycle = TransactionLifecycle::Sending);
        info!(to = %request.to, amount = %request.amount, "submitting payment");

        match self.facade.send_payment(request).await {
            Ok(result) if result.success => {
                info!(hash = ?result.hash, "payment submitted");
                let lifecycle = self.finish(
                    TransactionLifecycle::Success {
                        hash: result.hash.clone(),
                        message: SUCCESS_MESSAGE.to_string(),
                    },
                    true,
                );
                let hook = self.on_success.read().clone();
                if let Some(hook) = hook {
                    hook(&result);
                }
                lifecycle
            }
            Ok(_) => {
                warn!("payment not accepted by the ledger");
                self.finish(
                    TransactionLifecycle::Error {
                        error: AppError::Submission(REJECTED_MESSAGE.to_string()),
                    },
                    false,
                )
            }
            Err(err) => {
                warn!("payment failed: {}", err);
                let error = if err.message().trim().is_empty() {
                    AppError::Submission(FAILURE_FALLBACK_MESSAGE.to_string())
                } else {
                    err
                };
                self.finish(TransactionLifecycle::Error { error }, false)
            }
        }
    }

    /// Re-submit the current fields after an error. Validation runs again.
    pub async fn retry(&self, from: Option<&str>) -> TransactionLifecycle {
        let lifecycle = self.lifecycle();
        if !matches!(lifecycle, TransactionLifecycle::Error { .. }) {
            return lifecycle;
        }
        self.submit(from).await
    }

    /// Back to idle. Fields survive an error; they were already cleared on success.
    pub fn reset(&self) {
        self.state.update(|s| {
            if !s.lifecycle.is_sending() {
                s.lifecycle = TransactionLifecycle::Idle;
            }
        });
    }

    /// Put the form in the error state without a network call.
    pub fn fail(&self, error: AppError) -> TransactionLifecycle {
        if self.lifecycle().is_sending() {
            return TransactionLifecycle::Sending;
        }
        self.finish(TransactionLifecycle::Error { error }, false)
    }

    fn build_request(&self, from: Option<&str>, fields: &PaymentFields) -> Result<PaymentRequest> {
        let from = from
            .filter(|f| !f.is_empty())
            .ok_or_else(|| AppError::Validation(NOT_CONNECTED_MESSAGE.to_string()))?;

        let recipient = fields.recipient.trim();
        lib_utils::validate_account_address(recipient).map_err(AppError::Validation)?;
        let amount =
            lib_utils::validate_amount(&fields.amount, self.max_amount).map_err(AppError::Validation)?;
        let memo = lib_utils::validate_memo(&fields.memo).map_err(AppError::Validation)?;

        Ok(PaymentRequest {
            from: from.to_string(),
            to: recipient.to_string(),
            amount: plain_decimal(amount),
            memo,
        })
    }

    fn finish(&self, lifecycle: TransactionLifecycle, clear_fields: bool) -> TransactionLifecycle {
        self.state.update(|s| {
            s.lifecycle = lifecycle.clone();
            if clear_fields {
                s.fields = PaymentFields::default();
            }
        });
        lifecycle
    }
}

/// Render an amount the way the ledger expects it: fixed point, at most seven
/// fraction digits, no exponent.
fn plain_decimal(amount: f64) -> String {
    let text = format!("{:.7}", amount);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFacade, ALICE, BOB};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::task::LocalSet;

    fn form() -> (Arc<MockFacade>, Arc<TransactionForm>) {
        let facade = Arc::new(MockFacade::new());
        let form = Arc::new(TransactionForm::new(facade.clone(), 10_000.0));
        (facade, form)
    }

    fn fill(form: &TransactionForm, recipient: &str, amount: &str, memo: &str) {
        form.set_recipient(recipient);
        form.set_amount(amount);
        form.set_memo(memo);
    }

    #[tokio::test]
    async fn test_invalid_address_short_circuits() {
        let (facade, form) = form();
        let short = &BOB[..55];
        let wrong_prefix = BOB.replacen('G', "S", 1);

        for recipient in [short, wrong_prefix.as_str(), ""] {
            form.reset();
            fill(&form, recipient, "10", "");
            let lifecycle = form.submit(Some(ALICE)).await;
            assert!(
                matches!(lifecycle, TransactionLifecycle::Error { error: AppError::Validation(_) }),
                "{:?} accepted",
                recipient
            );
        }
        assert_eq!(facade.payment_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_amount_short_circuits() {
        let (facade, form) = form();
        for amount in ["0", "-5", "10000.01", "ten", "", "1e5"] {
            form.reset();
            fill(&form, BOB, amount, "");
            let lifecycle = form.submit(Some(ALICE)).await;
            assert!(
                matches!(lifecycle, TransactionLifecycle::Error { error: AppError::Validation(_) }),
                "{:?} accepted",
                amount
            );
            assert_eq!(form.fields().amount, amount);
        }
        assert_eq!(facade.payment_calls(), 0);
    }

    #[tokio::test]
    async fn test_oversized_memo_short_circuits() {
        let (facade, form) = form();
        fill(&form, BOB, "1", &"m".repeat(29));
        let lifecycle = form.submit(Some(ALICE)).await;
        assert!(lifecycle.error_message().unwrap_or_default().contains("28 bytes"));
        assert_eq!(facade.payment_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_without_wallet_short_circuits() {
        let (facade, form) = form();
        fill(&form, BOB, "1", "");
        let lifecycle = form.submit(None).await;
        assert_eq!(lifecycle.error_message(), Some(NOT_CONNECTED_MESSAGE));
        assert_eq!(facade.payment_calls(), 0);
    }

    #[tokio::test]
    async fn test_success_clears_fields_and_fires_hook() {
        let (facade, form) = form();
        let hooks = Arc::new(AtomicUsize::new(0));
        let counter = hooks.clone();
        form.on_success(move |result| {
            assert_eq!(result.hash.as_deref(), Some("H"));
            counter.fetch_add(1, Ordering::SeqCst);
        });

        fill(&form, BOB, " 25.5 ", " rent ");
        let lifecycle = form.submit(Some(ALICE)).await;

        assert_eq!(
            lifecycle,
            TransactionLifecycle::Success {
                hash: Some("H".to_string()),
                message: SUCCESS_MESSAGE.to_string(),
            }
        );
        assert_eq!(form.fields(), PaymentFields::default());
        assert_eq!(hooks.load(Ordering::SeqCst), 1);
        assert_eq!(
            facade.last_payment(),
            Some(PaymentRequest {
                from: ALICE.to_string(),
                to: BOB.to_string(),
                amount: "25.5".to_string(),
                memo: Some("rent".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_amount_sent_as_plain_decimal() {
        let (facade, form) = form();

        fill(&form, BOB, "1e3", "");
        form.submit(Some(ALICE)).await;
        assert_eq!(facade.last_payment().map(|p| p.amount), Some("1000".to_string()));

        form.reset();
        fill(&form, BOB, "+2.50", "");
        form.submit(Some(ALICE)).await;
        assert_eq!(facade.last_payment().map(|p| p.amount), Some("2.5".to_string()));

        assert_eq!(facade.payment_calls(), 2);
    }

    #[tokio::test]
    async fn test_rejected_payment_keeps_fields() {
        let (facade, form) = form();
        facade.push_payment(Err(AppError::Submission("User declined access".into())));

        fill(&form, BOB, "3", "note");
        let lifecycle = form.submit(Some(ALICE)).await;

        assert!(lifecycle
            .error_message()
            .unwrap_or_default()
            .contains("User declined access"));
        assert_eq!(
            form.fields(),
            PaymentFields {
                recipient: BOB.to_string(),
                amount: "3".to_string(),
                memo: "note".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_result_uses_generic_message() {
        let (facade, form) = form();
        facade.push_payment(Ok(PaymentResult::default()));
        fill(&form, BOB, "3", "");

        let lifecycle = form.submit(Some(ALICE)).await;
        assert_eq!(lifecycle.error_message(), Some(REJECTED_MESSAGE));
        assert_eq!(form.fields().amount, "3");
    }

    #[tokio::test]
    async fn test_empty_failure_message_falls_back() {
        let (facade, form) = form();
        facade.push_payment(Err(AppError::Submission(String::new())));
        fill(&form, BOB, "3", "");

        let lifecycle = form.submit(Some(ALICE)).await;
        assert_eq!(lifecycle.error_message(), Some(FAILURE_FALLBACK_MESSAGE));
    }

    #[tokio::test]
    async fn test_reset_paths() {
        let (facade, form) = form();
        facade.push_payment(Err(AppError::Submission("tx_bad_seq".into())));
        fill(&form, BOB, "3", "");
        form.submit(Some(ALICE)).await;

        form.reset();
        assert_eq!(form.lifecycle(), TransactionLifecycle::Idle);
        assert_eq!(form.fields().recipient, BOB);

        form.submit(Some(ALICE)).await;
        form.reset();
        assert_eq!(form.state(), TransactionFormState::default());
    }

    #[tokio::test]
    async fn test_retry_resubmits_and_revalidates() {
        let (facade, form) = form();
        facade.push_payment(Err(AppError::Submission("timeout".into())));
        fill(&form, BOB, "3", "");
        form.submit(Some(ALICE)).await;

        let lifecycle = form.retry(Some(ALICE)).await;
        assert!(matches!(lifecycle, TransactionLifecycle::Success { .. }));
        assert_eq!(facade.payment_calls(), 2);

        facade.push_payment(Err(AppError::Submission("timeout".into())));
        fill(&form, BOB, "3", "");
        form.submit(Some(ALICE)).await;
        form.set_amount("-1");
        let lifecycle = form.retry(Some(ALICE)).await;
        assert!(matches!(
            lifecycle,
            TransactionLifecycle::Error { error: AppError::Validation(_) }
        ));
        assert_eq!(facade.payment_calls(), 3);
    }

    #[tokio::test]
    async fn test_retry_outside_error_is_ignored() {
        let (facade, form) = form();
        fill(&form, BOB, "3", "");
        assert_eq!(form.retry(Some(ALICE)).await, TransactionLifecycle::Idle);
        assert_eq!(facade.payment_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_while_sending_is_ignored() {
        let local = LocalSet::new();
        local
            .run_until(async {
                let (facade, form) = form();
                let pending = facade.pending_payment();
                fill(&form, BOB, "3", "");

                let f = form.clone();
                let first = tokio::task::spawn_local(async move { f.submit(Some(ALICE)).await });
                tokio::task::yield_now().await;
                assert!(form.lifecycle().is_sending());
                assert!(!form.can_submit(true));

                assert_eq!(form.submit(Some(ALICE)).await, TransactionLifecycle::Sending);
                form.reset();
                assert!(form.lifecycle().is_sending());

                pending
                    .send(Ok(PaymentResult {
                        success: true,
                        hash: Some("H2".into()),
                    }))
                    .unwrap();
                let lifecycle = first.await.unwrap();
                assert!(matches!(lifecycle, TransactionLifecycle::Success { .. }));
                assert_eq!(facade.payment_calls(), 1);
            })
            .await;
    }

    #[test]
    fn test_can_submit_guard() {
        let (_facade, form) = form();
        assert!(!form.can_submit(true));
        form.set_recipient(BOB);
        form.set_amount("1");
        assert!(form.can_submit(true));
        assert!(!form.can_submit(false));
    }
}
