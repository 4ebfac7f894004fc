use crate::components::code_panel::CodePanel;
use crate::components::config_panel::ConfigPanel;
use crate::components::header::Header;
use crate::components::preview::Preview;
use crate::styles::stylesheet;
use tipbox_core::{TooltipConfig, generate_code};
use yew::prelude::*;

pub mod state;

pub use state::{ColorScheme, SandboxState, use_sandbox_state};

#[derive(Properties, PartialEq, Clone, Default)]
pub struct SandboxProps {
    #[prop_or_default]
    pub initial_config: TooltipConfig,
    #[prop_or_default]
    pub initial_scheme: ColorScheme,
}

/// The whole page: configuration on the left, live preview and generated
/// code on the right.
#[function_component(Sandbox)]
pub fn sandbox(p: &SandboxProps) -> Html {
    let state = use_sandbox_state(p.initial_config.clone(), p.initial_scheme);
    let config = (*state.config).clone();
    let scheme = *state.scheme;
    let code = AttrValue::from(generate_code(&config));

    html! {
        <div class={classes!("sandbox", scheme.class())}>
            <style>{ stylesheet() }</style>
            <Header {scheme} on_toggle_scheme={state.toggle_scheme()} />
            <main class="main-container">
                <ConfigPanel config={config.clone()} on_field={state.update_field()} />
                <section class="preview-panel">
                    <h2>{ "Live Preview" }</h2>
                    <Preview
                        config={config}
                        visible={state.preview_override()}
                        on_visibility_change={state.track_preview()}
                    />
                    <CodePanel {code} />
                </section>
            </main>
        </div>
    }
}
