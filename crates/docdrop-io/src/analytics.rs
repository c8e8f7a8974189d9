//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag.  All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).
//!
//! Event names follow Simple Analytics conventions: lowercase
//! alphanumeric with underscores, max 200 characters.  File names and
//! other user data are never included.

use docdrop_core::DocumentType;
use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    debug_assert!(
        name.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
        "event name must be lowercase alphanumeric or underscore, got: {name:?}"
    );
    debug_assert!(
        name.len() <= 200,
        "event name exceeds 200-character limit: {name:?}"
    );
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record that a candidate file was accepted (`document_selected`) or
/// rejected (`document_rejected`).
pub fn track_selection(accepted: bool) {
    track_event(if accepted {
        "document_selected"
    } else {
        "document_rejected"
    });
}

/// Record a submission, e.g. `document_submitted_pan`.
pub fn track_submission(document_type: DocumentType) {
    track_event(&format!("document_submitted_{}", document_type.value()));
}
