use super::foundation as f;
use f::TargetCast;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<String>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let class = f::class_list(&["control-select"], &props.class);
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                cb.emit(sel.value());
            }
        })
    };
    f::html! {
        <select id={props.id.clone()} class={class} value={props.value.clone()} onchange={on_change}>
            { for props.options.iter().map(|opt| {
                f::html! {
                    <option value={opt.value.clone()} selected={opt.value == props.value}>
                        { opt.label.clone() }
                    </option>
                }
            })}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn select_marks_current_value() {
        let props = SelectProps {
            options: vec![
                SelectOption::new("fade", "Fade"),
                SelectOption::new("slide", "Slide"),
            ],
            value: f::AttrValue::from("slide"),
            id: None,
            class: f::Classes::new(),
            on_change: f::Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Select>::with_props(props).render());
        assert!(html.contains("Fade"));
        let option = |value: &str| {
            html.split("<option")
                .find(|chunk| chunk.contains(&format!("value=\"{value}\"")))
                .map(str::to_owned)
                .unwrap_or_default()
        };
        assert!(option("slide").contains("selected"), "{html}");
        assert!(!option("fade").contains("selected"), "{html}");
    }
}
