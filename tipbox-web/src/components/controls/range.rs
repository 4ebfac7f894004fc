use super::foundation as f;
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct RangeProps {
    pub value: u16,
    pub min: u16,
    pub max: u16,
    #[prop_or(1)]
    pub step: u16,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<String>,
}

/// Slider emitting its raw value; range checking happens in the config layer.
#[f::function_component(Range)]
pub fn range(props: &RangeProps) -> f::Html {
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let class = f::class_list(&["control-range"], &props.class);
    f::html! {
        <input
            id={props.id.clone()}
            class={class}
            type="range"
            min={props.min.to_string()}
            max={props.max.to_string()}
            step={props.step.to_string()}
            value={props.value.to_string()}
            oninput={on_change}
        />
    }
}
