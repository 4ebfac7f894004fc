use super::foundation as f;
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ColorInputProps {
    pub value: f::AttrValue,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<String>,
}

#[f::function_component(ColorInput)]
pub fn color_input(props: &ColorInputProps) -> f::Html {
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let class = f::class_list(&["control-color"], &props.class);
    f::html! {
        <input
            id={props.id.clone()}
            class={class}
            type="color"
            value={props.value.clone()}
            oninput={on_change}
        />
    }
}
