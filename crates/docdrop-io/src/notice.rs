//! Blocking user notices via `window.alert()`.

use wasm_bindgen::JsValue;

/// Errors that can occur when showing a notice.
#[derive(Debug, thiserror::Error)]
pub enum NoticeError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for NoticeError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Show `message` in a blocking alert dialog.
///
/// # Errors
///
/// Returns [`NoticeError::JsError`] if there is no global window or the
/// alert call fails.
pub fn show(message: &str) -> Result<(), NoticeError> {
    let window =
        web_sys::window().ok_or_else(|| NoticeError::JsError("no global window".into()))?;
    window.alert_with_message(message)?;
    Ok(())
}
