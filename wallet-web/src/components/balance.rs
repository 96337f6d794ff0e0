//! Balance Card

use leptos::prelude::*;
use shared::format_amount;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::BALANCE_TITLE;

#[component]
pub fn BalanceCard() -> impl IntoView {
    let wallet = use_wallet_context();

    let loading = move || wallet.balance.with(|s| s.loading);
    let error = move || wallet.balance.with(|s| s.error.clone());
    let formatted = move || wallet.balance.with(|s| format_amount(&s.data));
    let network = move || {
        lib_core::config::core_config().network.display_name()
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2>{BALANCE_TITLE}</h2>
                <button
                    class="btn btn-icon"
                    class:spinning=loading
                    disabled=loading
                    title="Refresh balance"
                    on:click=move |_| wallet.refresh_balance()
                >
                    "⟳"
                </button>
            </div>
            {move || error().map(|message| view! { <div class="inline-error">{message}</div> })}
            <div class="balance-amount">
                <span>{formatted}</span>
                <span class="asset">" XLM"</span>
            </div>
            <div class="muted">{network}</div>
        </div>
    }
}
