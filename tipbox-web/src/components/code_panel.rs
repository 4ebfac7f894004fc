use crate::clipboard::{self, ClipboardError};
use crate::dom;
use yew::prelude::*;

/// How long the "Copied!" acknowledgment stays up.
pub const ACK_DURATION_MS: i32 = 2_000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub code: AttrValue,
}

/// A flag that lowers itself after a fixed delay.
#[derive(Clone)]
pub struct Acknowledgment {
    pub shown: bool,
    pub raise: Callback<()>,
}

#[cfg(target_arch = "wasm32")]
fn schedule_reset(duration_ms: i32, shown: UseStateHandle<bool>) -> Option<dom::Timeout> {
    match dom::Timeout::schedule(duration_ms, move || shown.set(false)) {
        Ok(timer) => Some(timer),
        Err(err) => {
            dom::console_error(&format!(
                "Failed to schedule copy acknowledgment reset: {}",
                dom::js_error_message(&err)
            ));
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_reset(duration_ms: i32, shown: UseStateHandle<bool>) -> Option<dom::Timeout> {
    let _ = (duration_ms, shown);
    None
}

/// The reset timer lives in an effect, so unmounting (or raising again)
/// clears any pending reset.
#[hook]
pub fn use_acknowledgment(duration_ms: i32) -> Acknowledgment {
    let shown = use_state(|| false);
    let generation = use_state(|| 0_u32);
    {
        let shown = shown.clone();
        use_effect_with((*shown, *generation), move |(active, _)| {
            let timer = if *active {
                schedule_reset(duration_ms, shown)
            } else {
                None
            };
            move || drop(timer)
        });
    }
    let raise = {
        let shown = shown.clone();
        let generation = generation.clone();
        Callback::from(move |()| {
            shown.set(true);
            generation.set(generation.wrapping_add(1));
        })
    };
    Acknowledgment {
        shown: *shown,
        raise,
    }
}

/// Copy `code` and raise the acknowledgment on success.
///
/// # Errors
/// Propagates the clipboard failure after reporting it; the acknowledgment
/// stays down.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn copy_and_acknowledge(code: &str, raise: &Callback<()>) -> Result<(), ClipboardError> {
    match clipboard::write_text(code).await {
        Ok(()) => {
            raise.emit(());
            Ok(())
        }
        Err(err) => {
            clipboard::report_failure(&err);
            Err(err)
        }
    }
}

#[function_component(CodePanel)]
pub fn code_panel(p: &Props) -> Html {
    let ack = use_acknowledgment(ACK_DURATION_MS);
    let onclick = {
        let code = p.code.clone();
        let raise = ack.raise.clone();
        Callback::from(move |_: MouseEvent| {
            let code = code.clone();
            let raise = raise.clone();
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                let _ = copy_and_acknowledge(&code, &raise).await;
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (code, raise);
        })
    };
    html! {
        <div class="code-section">
            <div class="code-header">
                <h3>{ "Generated Code" }</h3>
                <button class="copy-button" {onclick} aria-label="Copy code to clipboard">
                    <span aria-hidden="true">{ "⧉" }</span>
                    { if ack.shown { "Copied!" } else { "Copy" } }
                </button>
            </div>
            <pre class="code-block"><code>{ p.code.clone() }</code></pre>
        </div>
    }
}
