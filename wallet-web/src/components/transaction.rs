//! Send XLM Card
//!
//! Renders the four lifecycle states of the transaction form.

use leptos::prelude::*;
use lib_core::TransactionLifecycle;
use shared::ExplorerKind;

use crate::state::wallet::use_wallet_context;
use crate::utils::clipboard::copy_with_indicator;

#[component]
pub fn TransactionCard() -> impl IntoView {
    let wallet = use_wallet_context();
    // memoized so typing in the inputs does not rebuild the whole card
    let lifecycle = Memo::new(move |_| wallet.form.with(|s| s.lifecycle.clone()));

    view! {
        <div class="card" id="transactions">
            <div class="card-header">
                <h2>"Send XLM"</h2>
            </div>
            {move || match lifecycle.get() {
                TransactionLifecycle::Idle => view! { <PaymentInputs/> }.into_any(),
                TransactionLifecycle::Sending => view! { <SendingView/> }.into_any(),
                TransactionLifecycle::Success { hash, message } => {
                    view! { <SuccessView hash=hash message=message/> }.into_any()
                }
                TransactionLifecycle::Error { error } => {
                    view! { <ErrorView message=error.message().to_string()/> }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn PaymentInputs() -> impl IntoView {
    let wallet = use_wallet_context();
    let fields = move || wallet.form.with(|s| s.fields.clone());

    view! {
        <div class="form">
            <label>
                "Recipient Address"
                <input
                    type="text"
                    placeholder="G..."
                    prop:value=move || fields().recipient
                    on:input=move |ev| wallet.set_recipient(event_target_value(&ev))
                />
            </label>
            <label>
                "Amount (XLM)"
                <input
                    type="number"
                    placeholder="0.0"
                    step="0.0000001"
                    min="0.0000001"
                    prop:value=move || fields().amount
                    on:input=move |ev| wallet.set_amount(event_target_value(&ev))
                />
            </label>
            <label>
                "Memo (Optional)"
                <input
                    type="text"
                    placeholder="Transaction memo..."
                    maxlength="28"
                    prop:value=move || fields().memo
                    on:input=move |ev| wallet.set_memo(event_target_value(&ev))
                />
            </label>
            <button
                class="btn btn-wide"
                disabled=move || !wallet.can_submit()
                on:click=move |_| wallet.submit_payment()
            >
                "Send XLM"
            </button>
        </div>
    }
}

#[component]
fn SendingView() -> impl IntoView {
    view! {
        <div class="sending">
            <div class="spinner"></div>
            <p>"Sending transaction..."</p>
            <p class="muted">"Please confirm in your wallet"</p>
        </div>
    }
}

#[component]
fn SuccessView(hash: Option<String>, message: String) -> impl IntoView {
    let wallet = use_wallet_context();
    let copied = RwSignal::new(None::<String>);

    let hash_block = hash.map(|hash| {
        let explorer = wallet.explorer_link(&hash, ExplorerKind::Transaction);
        let to_copy = hash.clone();
        view! {
            <div class="hash-box">
                <p class="muted">"Transaction Hash"</p>
                <p class="mono break">{hash}</p>
                <button
                    class="btn btn-icon"
                    title=move || if copied.get().is_some() { "Copied!" } else { "Copy hash" }
                    on:click=move |_| copy_with_indicator(to_copy.clone(), copied)
                >
                    {move || if copied.get().is_some() { "✓" } else { "⧉" }}
                </button>
                <a class="btn btn-icon" href=explorer target="_blank" rel="noopener noreferrer" title="View on explorer">
                    "↗"
                </a>
            </div>
        }
    });

    view! {
        <div class="success">
            <p class="success-title">"✓ " {message}</p>
            {hash_block}
            <button class="btn btn-wide" on:click=move |_| wallet.reset_payment()>
                "Send Another Transaction"
            </button>
        </div>
    }
}

#[component]
fn ErrorView(message: String) -> impl IntoView {
    let wallet = use_wallet_context();

    view! {
        <div class="error">
            <p class="inline-error">"⚠ " {message}</p>
            <div class="row">
                <button class="btn btn-outline" on:click=move |_| wallet.reset_payment()>
                    "Try Again"
                </button>
                <button class="btn" on:click=move |_| wallet.retry_payment()>
                    "Retry"
                </button>
            </div>
        </div>
    }
}
