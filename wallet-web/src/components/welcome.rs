use leptos::prelude::*;

use crate::utils::constants::APP_NAME;

const FEATURES: &[(&str, &str)] = &[
    (
        "🚀 Send XLM",
        "Send XLM transactions to any Stellar address with real-time feedback",
    ),
    (
        "📊 Track Balance",
        "Monitor your XLM balance with automatic updates",
    ),
    (
        "📜 Transaction History",
        "View your complete transaction history with detailed information",
    ),
];

/// Landing view while no wallet is connected.
#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="welcome">
            <h1>"Welcome to " {APP_NAME}</h1>
            <p class="muted">
                "Connect your wallet to start sending XLM transactions on the Stellar testnet"
            </p>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, body)| view! {
                        <div class="card feature">
                            <h3>{*title}</h3>
                            <p class="muted">{*body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
