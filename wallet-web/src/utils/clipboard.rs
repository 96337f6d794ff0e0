//! Clipboard helper with a transient "copied" marker.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::utils::constants::COPIED_INDICATOR_MS;

/// Copy `text`, set `marker` to it, then clear the marker after a short delay.
pub fn copy_with_indicator(text: String, marker: RwSignal<Option<String>>) {
    leptos::task::spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("Clipboard write failed: {:?}", e);
            return;
        }

        marker.set(Some(text.clone()));
        TimeoutFuture::new(COPIED_INDICATOR_MS).await;
        // a newer copy may have replaced the marker meanwhile
        if marker.get_untracked().as_deref() == Some(text.as_str()) {
            marker.set(None);
        }
    });
}
