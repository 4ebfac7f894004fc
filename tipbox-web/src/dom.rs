use tipbox_core::{Rect, ScrollOffset, TriggerGeometry};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Measure an element's bounding box together with the page scroll offset.
#[must_use]
pub fn measure(element: &Element) -> Option<TriggerGeometry> {
    let win = window()?;
    let bounds = element.get_bounding_client_rect();
    Some(TriggerGeometry {
        rect: Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
        scroll: ScrollOffset {
            x: win.scroll_x().unwrap_or_default(),
            y: win.scroll_y().unwrap_or_default(),
        },
    })
}

/// A pending `setTimeout` callback, cleared when dropped.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` to run once after `millis`.
    ///
    /// # Errors
    /// Returns an error if no browser window is available or the timer cannot be scheduled.
    pub fn schedule(millis: i32, callback: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(run) = callback.take() {
                run();
            }
        }) as Box<dyn FnMut()>);
        let id = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )?;
        Ok(Self {
            id,
            _callback: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Yield to the event loop for `duration_ms`.
///
/// # Errors
/// Returns an error if no browser window is available or the timer cannot be scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<js_sys::Function> = None;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });
    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("promise resolver was not provided"))?;
    let _timer = Timeout::schedule(duration_ms, move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    })?;
    JsFuture::from(promise).await?;
    Ok(())
}
