//! Navigation Bar Component

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet = use_wallet_context();

    let connecting = move || wallet.connection.with(|state| state.is_connecting());
    let short_address = move || {
        wallet
            .address()
            .map(|address| wallet.format_address(&address))
            .unwrap_or_default()
    };

    view! {
        <nav>
            <div class="nav-inner">
                <a href="#" class="nav-link-clean">
                    <span class="nav-title">{APP_NAME}</span>
                </a>
                <div class="nav-actions">
                    <Show
                        when=move || wallet.is_connected()
                        fallback=move || view! {
                            <button
                                class="btn"
                                disabled=connecting
                                on:click=move |_| wallet.connect()
                            >
                                {move || if connecting() { "Connecting..." } else { "Connect Wallet" }}
                            </button>
                        }
                    >
                        <div class="address-badge">
                            <span class="status-dot"></span>
                            <span class="mono">{short_address}</span>
                        </div>
                        <a href="#transactions" class="nav-link">"Transactions"</a>
                        <button class="btn btn-outline" on:click=move |_| wallet.disconnect()>
                            "Disconnect"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
