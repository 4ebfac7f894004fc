use thiserror::Error;

/// Failure to place text on the system clipboard.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("browser window unavailable")]
    WindowUnavailable,
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
}

/// Write `text` to the system clipboard through `navigator.clipboard`.
///
/// # Errors
/// Returns [`ClipboardError::WindowUnavailable`] outside a browser and
/// [`ClipboardError::WriteRejected`] when the browser refuses the write
/// (missing permission, insecure context, unfocused document).
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    use crate::dom;
    use wasm_bindgen_futures::JsFuture;

    let win = dom::window().ok_or(ClipboardError::WindowUnavailable)?;
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::WriteRejected(dom::js_error_message(&err)))
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unused_async)]
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let _ = text;
    Err(ClipboardError::WindowUnavailable)
}

/// Report a failed copy without disturbing the UI.
pub fn report_failure(err: &ClipboardError) {
    log::error!("Failed to copy code: {err}");
    #[cfg(target_arch = "wasm32")]
    crate::dom::console_error(&format!("Failed to copy code: {err}"));
}
