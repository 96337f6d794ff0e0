//! Stellar Demo Wallet - Leptos Frontend
//!
//! Single page: navbar on top, then either the welcome screen or the three
//! wallet cards once an address is connected.

use leptos::prelude::*;
use lib_core::config::core_config;

use crate::components::{BalanceCard, HistoryCard, Navbar, TransactionCard, Welcome};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let wallet = provide_wallet_context(core_config());

    view! {
        <div class="app-container">
            <Navbar/>
            <main class="content">
                <Show when=move || wallet.is_connected() fallback=|| view! { <Welcome/> }>
                    <BalanceCard/>
                    <TransactionCard/>
                    <HistoryCard/>
                </Show>
            </main>
        </div>
    }
}
