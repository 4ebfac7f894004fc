use crate::components::controls::{ColorInput, ControlGroup, Range, Select, SelectOption, Textarea};
use tipbox_core::config::{FONT_SIZE_MAX, FONT_SIZE_MIN, WIDTH_MAX, WIDTH_MIN};
use tipbox_core::{Animation, ConfigField, ICON_OPTIONS, Position, Shape, TooltipConfig, Trigger};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: TooltipConfig,
    pub on_field: Callback<ConfigField>,
}

/// Parse a control's raw value into a field update; rejected input is logged
/// and dropped so the config never leaves its domain.
#[must_use]
pub fn field_handler(name: &'static str, on_field: &Callback<ConfigField>) -> Callback<String> {
    let on_field = on_field.clone();
    Callback::from(move |raw: String| match ConfigField::parse(name, &raw) {
        Ok(field) => on_field.emit(field),
        Err(err) => log::warn!("Ignoring {name} input: {err}"),
    })
}

fn options<T: Copy>(
    all: impl IntoIterator<Item = T>,
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> Vec<SelectOption> {
    all.into_iter()
        .map(|item| SelectOption::new(value(item), label(item)))
        .collect()
}

fn icon_options() -> Vec<SelectOption> {
    ICON_OPTIONS
        .iter()
        .map(|opt| SelectOption::new(opt.value.unwrap_or_default(), opt.label))
        .collect()
}

#[function_component(ConfigPanel)]
pub fn config_panel(p: &Props) -> Html {
    let cfg = &p.config;
    let handler = |name: &'static str| field_handler(name, &p.on_field);
    html! {
        <section class="controls-panel" aria-labelledby="config-heading">
            <h2 id="config-heading">{ "Configuration" }</h2>

            <ControlGroup label="Trigger Mechanism" input_id="trigger-select">
                <Select
                    id="trigger-select"
                    options={options(Trigger::ALL, Trigger::as_str, Trigger::label)}
                    value={cfg.trigger.as_str()}
                    on_change={handler("trigger")}
                />
            </ControlGroup>

            <ControlGroup label="Position" input_id="position-select">
                <Select
                    id="position-select"
                    options={options(Position::ALL, Position::as_str, Position::label)}
                    value={cfg.position.as_str()}
                    on_change={handler("position")}
                />
            </ControlGroup>

            <ControlGroup label="Shape" input_id="shape-select">
                <Select
                    id="shape-select"
                    options={options(Shape::ALL, Shape::as_str, Shape::label)}
                    value={cfg.shape.as_str()}
                    on_change={handler("shape")}
                />
            </ControlGroup>

            <ControlGroup label="Background Color" input_id="background-color">
                <ColorInput
                    id="background-color"
                    value={AttrValue::from(cfg.background_color.to_string())}
                    on_change={handler("backgroundColor")}
                />
            </ControlGroup>

            <ControlGroup label="Text Color" input_id="text-color">
                <ColorInput
                    id="text-color"
                    value={AttrValue::from(cfg.text_color.to_string())}
                    on_change={handler("textColor")}
                />
            </ControlGroup>

            <ControlGroup label={format!("Width: {}px", cfg.width)} input_id="width-range">
                <Range
                    id="width-range"
                    value={cfg.width}
                    min={WIDTH_MIN}
                    max={WIDTH_MAX}
                    on_change={handler("width")}
                />
            </ControlGroup>

            <ControlGroup label={format!("Font Size: {}px", cfg.font_size)} input_id="font-size-range">
                <Range
                    id="font-size-range"
                    value={cfg.font_size}
                    min={FONT_SIZE_MIN}
                    max={FONT_SIZE_MAX}
                    on_change={handler("fontSize")}
                />
            </ControlGroup>

            <ControlGroup label="Animation" input_id="animation-select">
                <Select
                    id="animation-select"
                    options={options(Animation::ALL, Animation::as_str, Animation::label)}
                    value={cfg.animation.as_str()}
                    on_change={handler("animation")}
                />
            </ControlGroup>

            <ControlGroup label="Icon" input_id="icon-select">
                <Select
                    id="icon-select"
                    options={icon_options()}
                    value={AttrValue::from(cfg.icon.clone().unwrap_or_default())}
                    on_change={handler("icon")}
                />
            </ControlGroup>

            <ControlGroup label="Tooltip Content" input_id="content-input">
                <Textarea
                    id="content-input"
                    value={AttrValue::from(cfg.content.clone())}
                    rows={3}
                    placeholder="Enter tooltip content..."
                    oninput={handler("content")}
                />
            </ControlGroup>
        </section>
    }
}
