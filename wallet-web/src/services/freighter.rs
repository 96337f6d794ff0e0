//! Freighter + Stellar SDK Integration via wasm-bindgen
//!
//! JavaScript interop for the Freighter browser extension (`window.freighterApi`)
//! and the Stellar JS SDK (`window.StellarSdk`) that builds payment envelopes.
//! Both are loaded by `index.html`.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

// ============================================================================
// FREIGHTER + SDK (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
function freighter() {
    return window.freighterApi || null;
}

function unwrap(result, field) {
    // Freighter v1 returns plain strings, v2+ returns { [field], error }
    if (typeof result === 'string') {
        return result;
    }
    if (result && result.error) {
        const err = result.error;
        throw new Error(typeof err === 'string' ? err : (err.message || String(err)));
    }
    if (result && result[field]) {
        return result[field];
    }
    throw new Error('Unexpected response from Freighter');
}

export function isFreighterAvailable() {
    return freighter() !== null;
}

export async function requestFreighterAccess() {
    const api = freighter();
    if (!api) {
        throw new Error('Freighter wallet not found. Please install the Freighter extension.');
    }
    try {
        if (typeof api.isConnected === 'function') {
            const connected = await api.isConnected();
            const ok = typeof connected === 'boolean' ? connected : connected && connected.isConnected;
            if (!ok) {
                throw new Error('Freighter is not available. Please install or unlock it.');
            }
        }
        const access = await api.requestAccess();
        return unwrap(access, 'address');
    } catch (error) {
        throw new Error(error instanceof Error ? error.message : String(error));
    }
}

export async function signWithFreighter(xdr, networkPassphrase) {
    const api = freighter();
    if (!api) {
        throw new Error('Freighter wallet not found');
    }
    try {
        const signed = await api.signTransaction(xdr, { networkPassphrase });
        return unwrap(signed, 'signedTxXdr');
    } catch (error) {
        throw new Error(error instanceof Error ? error.message : String(error));
    }
}

export async function buildPaymentXdr(horizonUrl, networkPassphrase, from, to, amount, memo) {
    const sdk = window.StellarSdk;
    if (!sdk) {
        throw new Error('Stellar SDK not loaded');
    }
    try {
        const server = new sdk.Horizon.Server(horizonUrl);
        const account = await server.loadAccount(from);
        let builder = new sdk.TransactionBuilder(account, {
            fee: sdk.BASE_FEE,
            networkPassphrase,
        })
            .addOperation(sdk.Operation.payment({
                destination: to,
                asset: sdk.Asset.native(),
                amount,
            }))
            .setTimeout(180);
        if (memo) {
            builder = builder.addMemo(sdk.Memo.text(memo));
        }
        return builder.build().toXDR();
    } catch (error) {
        throw new Error(error instanceof Error ? error.message : String(error));
    }
}
")]
extern "C" {
    /// Whether the Freighter API object is present on the page
    fn isFreighterAvailable() -> bool;

    #[wasm_bindgen(catch)]
    async fn requestFreighterAccess() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn signWithFreighter(xdr: &str, network_passphrase: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn buildPaymentXdr(
        horizon_url: &str,
        network_passphrase: &str,
        from: &str,
        to: &str,
        amount: &str,
        memo: Option<String>,
    ) -> Result<JsValue, JsValue>;
}

/// Shape of a JS `Error` once it crosses into Rust.
#[derive(Deserialize)]
struct JsErrorShape {
    message: Option<String>,
}

/// Best-effort human message from a rejected promise.
fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    serde_wasm_bindgen::from_value::<JsErrorShape>(err)
        .ok()
        .and_then(|shape| shape.message)
        .unwrap_or_else(|| fallback.to_string())
}

fn expect_string(value: JsValue, what: &str) -> Result<String, String> {
    value
        .as_string()
        .ok_or_else(|| format!("{} is not a string", what))
}

pub fn is_available() -> bool {
    isFreighterAvailable()
}

/// Ask Freighter for access; resolves to the account address.
pub async fn request_access() -> Result<String, String> {
    let value = requestFreighterAccess()
        .await
        .map_err(|e| js_error_message(e, "Failed to connect wallet"))?;
    expect_string(value, "Address")
}

/// Build the unsigned payment envelope (base64 XDR).
pub async fn build_payment(
    horizon_url: &str,
    network_passphrase: &str,
    from: &str,
    to: &str,
    amount: &str,
    memo: Option<String>,
) -> Result<String, String> {
    let value = buildPaymentXdr(horizon_url, network_passphrase, from, to, amount, memo)
        .await
        .map_err(|e| js_error_message(e, "Failed to build transaction"))?;
    expect_string(value, "Transaction XDR")
}

/// Have Freighter sign `xdr`; resolves to the signed envelope.
pub async fn sign_transaction(xdr: &str, network_passphrase: &str) -> Result<String, String> {
    let value = signWithFreighter(xdr, network_passphrase)
        .await
        .map_err(|e| js_error_message(e, "Transaction signing was rejected"))?;
    expect_string(value, "Signed XDR")
}
