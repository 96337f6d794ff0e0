//! Transaction History Card

use leptos::prelude::*;
use lib_core::model::HistoryRow;
use shared::Direction;

use crate::state::wallet::use_wallet_context;
use crate::utils::clipboard::copy_with_indicator;
use crate::utils::constants::{HISTORY_EMPTY_HINT, HISTORY_EMPTY_TITLE};

#[component]
pub fn HistoryCard() -> impl IntoView {
    let wallet = use_wallet_context();
    let copied = RwSignal::new(None::<String>);

    let loading = move || wallet.history.with(|s| s.loading);
    let error = move || wallet.history.with(|s| s.error.clone());
    let is_empty = move || wallet.history.with(|s| s.data.is_empty());

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Transaction History"</h2>
                <button
                    class="btn btn-icon"
                    class:spinning=loading
                    disabled=loading
                    title="Refresh transactions"
                    on:click=move |_| wallet.refresh_history()
                >
                    "⟳"
                </button>
            </div>
            {move || {
                if let Some(message) = error() {
                    view! { <div class="inline-error">{message}</div> }.into_any()
                } else if loading() {
                    view! { <div class="spinner"></div> }.into_any()
                } else if is_empty() {
                    view! {
                        <div class="empty">
                            <p>{HISTORY_EMPTY_TITLE}</p>
                            <p class="muted">{HISTORY_EMPTY_HINT}</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="history-list">
                            <For
                                each=move || wallet.history_rows()
                                key=|row| row.id.clone()
                                children=move |row| view! { <HistoryItem row=row copied=copied/> }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn HistoryItem(row: HistoryRow, copied: RwSignal<Option<String>>) -> impl IntoView {
    let sent = row.direction == Direction::Sent;
    let hash = row.hash.clone();
    let is_copied = {
        let hash = hash.clone();
        move || copied.with(|c| c.as_deref() == Some(hash.as_str()))
    };
    let is_copied_title = is_copied.clone();

    view! {
        <div class="history-item">
            <div class="row">
                <span class="dot" class:sent=sent class:received={!sent}></span>
                <span>{row.direction.label()}</span>
                <span class="asset">{row.asset.clone()}</span>
                <span class="muted">{row.timestamp}</span>
            </div>
            <div class="row">
                <span class="amount" class:sent=sent>{row.amount} " " {row.asset}</span>
                <span class="muted">{row.counterparty_label} ": " {row.counterparty}</span>
            </div>
            <div class="row">
                <span class="mono muted break">"Hash: " {hash.clone()}</span>
                <button
                    class="btn btn-icon"
                    title=move || if is_copied_title() { "Copied!" } else { "Copy transaction hash" }
                    on:click=move |_| copy_with_indicator(hash.clone(), copied)
                >
                    {move || if is_copied() { "✓" } else { "⧉" }}
                </button>
                <a
                    class="btn btn-icon"
                    href=row.explorer_url
                    target="_blank"
                    rel="noopener noreferrer"
                    title="View on explorer"
                >
                    "↗"
                </a>
            </div>
        </div>
    }
}
