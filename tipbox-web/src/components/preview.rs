use crate::components::tooltip::Tooltip;
use tipbox_core::TooltipConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: TooltipConfig,
    #[prop_or_default]
    pub visible: Option<bool>,
    #[prop_or_default]
    pub on_visibility_change: Callback<bool>,
}

/// Live tooltip bound to the sandbox configuration.
#[function_component(Preview)]
pub fn preview(p: &Props) -> Html {
    let cfg = &p.config;
    html! {
        <div class="preview-area">
            <Tooltip
                trigger={cfg.trigger}
                position={cfg.position}
                shape={cfg.shape}
                background_color={cfg.background_color.clone()}
                text_color={cfg.text_color.clone()}
                width={cfg.width}
                font_size={cfg.font_size}
                content={AttrValue::from(cfg.content.clone())}
                animation={cfg.animation}
                icon={cfg.icon.clone().map(AttrValue::from)}
                visible={p.visible}
                on_visibility_change={p.on_visibility_change.clone()}
            >
                <button class="preview-trigger" type="button">
                    { cfg.trigger.preview_label() }
                </button>
            </Tooltip>
            <p class="preview-instructions">{ cfg.trigger.instructions() }</p>
        </div>
    }
}
