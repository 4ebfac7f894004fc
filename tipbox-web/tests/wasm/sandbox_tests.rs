use crate::{mount_root, text_of};
use std::cell::Cell;
use std::rc::Rc;
use tipbox_core::{ConfigField, TooltipConfig, generate_code};
use tipbox_web::app::{ColorScheme, Sandbox, SandboxProps, use_sandbox_state};
use tipbox_web::components::code_panel::use_acknowledgment;
use tipbox_web::components::tooltip::{Tooltip, TooltipProps};
use tipbox_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::Renderer;
use yew::prelude::*;

fn edited_config() -> TooltipConfig {
    TooltipConfig::default()
        .with(ConfigField::Width(350))
        .with(ConfigField::FontSize(22))
}

/// Flips the scheme once on mount and renders what the hook holds.
#[function_component(ToggleHarness)]
fn toggle_harness() -> Html {
    let state = use_sandbox_state(edited_config(), ColorScheme::Light);
    {
        let toggle = state.toggle_scheme();
        use_effect_with((), move |_| {
            toggle.emit(());
            || ()
        });
    }
    html! {
        <>
            <span id="harness-scheme">{ state.scheme.class() }</span>
            <pre id="harness-code">{ generate_code(&state.config) }</pre>
        </>
    }
}

#[wasm_bindgen_test]
async fn toggling_scheme_leaves_config_untouched() {
    let root = mount_root("toggle-harness");
    let app = Renderer::<ToggleHarness>::with_root(root).render();
    dom::sleep_ms(30).await.expect("sleep");
    assert_eq!(text_of("#harness-scheme"), "dark");
    assert_eq!(text_of("#harness-code"), generate_code(&edited_config()));
    app.destroy();
}

#[wasm_bindgen_test]
async fn theme_button_flips_scheme_but_not_generated_code() {
    let root = mount_root("sandbox-root");
    let props = SandboxProps {
        initial_config: edited_config(),
        ..SandboxProps::default()
    };
    let app = Renderer::<Sandbox>::with_root_and_props(root, props).render();
    dom::sleep_ms(30).await.expect("sleep");
    let before = text_of("#sandbox-root code");
    assert!(before.contains("width={350}"), "{before}");

    let doc = dom::document().expect("document");
    let toggle: web_sys::HtmlElement = doc
        .query_selector("#sandbox-root .theme-toggle")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("toggle is an html element");
    toggle.click();
    dom::sleep_ms(30).await.expect("sleep");

    let sandbox = doc
        .query_selector("#sandbox-root .sandbox")
        .expect("query sandbox")
        .expect("sandbox exists");
    assert!(sandbox.class_list().contains("dark"));
    assert_eq!(text_of("#sandbox-root code"), before);
    app.destroy();
}

#[derive(Properties, PartialEq)]
struct AckHarnessProps {
    duration_ms: i32,
}

/// Raises the acknowledgment once on mount.
#[function_component(AckHarness)]
fn ack_harness(props: &AckHarnessProps) -> Html {
    let ack = use_acknowledgment(props.duration_ms);
    {
        let raise = ack.raise.clone();
        use_effect_with((), move |_| {
            raise.emit(());
            || ()
        });
    }
    html! {
        <span id="ack-label">{ if ack.shown { "Copied!" } else { "Copy" } }</span>
    }
}

#[wasm_bindgen_test]
async fn acknowledgment_reverts_after_its_duration() {
    let root = mount_root("ack-root");
    let app = Renderer::<AckHarness>::with_root_and_props(root, AckHarnessProps { duration_ms: 150 })
        .render();
    dom::sleep_ms(30).await.expect("sleep");
    assert_eq!(text_of("#ack-label"), "Copied!");
    dom::sleep_ms(300).await.expect("sleep");
    assert_eq!(text_of("#ack-label"), "Copy");
    app.destroy();
}

#[wasm_bindgen_test]
async fn owner_override_does_not_echo_through_callback() {
    let emitted = Rc::new(Cell::new(0));
    let props = TooltipProps {
        content: AttrValue::from("Pinned"),
        trigger: Default::default(),
        position: Default::default(),
        shape: Default::default(),
        background_color: tipbox_core::HexColor::default_background(),
        text_color: tipbox_core::HexColor::default_text(),
        width: 200,
        font_size: 14,
        icon: None,
        animation: Default::default(),
        visible: Some(true),
        on_visibility_change: {
            let emitted = Rc::clone(&emitted);
            Callback::from(move |_: bool| emitted.set(emitted.get() + 1))
        },
        overlay_id: AttrValue::from("pinned-tooltip"),
        children: Children::default(),
    };
    let root = mount_root("pinned-root");
    let app = Renderer::<Tooltip>::with_root_and_props(root, props).render();
    dom::sleep_ms(30).await.expect("sleep");
    assert_eq!(text_of("#pinned-tooltip .tooltip-content"), "Pinned");
    assert_eq!(emitted.get(), 0);
    app.destroy();
}
