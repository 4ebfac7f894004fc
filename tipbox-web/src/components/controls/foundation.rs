pub use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[derive(Properties, PartialEq, Clone)]
pub struct ControlGroupProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub input_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Labelled wrapper shared by every sandbox control.
#[function_component(ControlGroup)]
pub fn control_group(props: &ControlGroupProps) -> Html {
    html! {
        <div class="control-group">
            <label for={props.input_id.clone()}>{ props.label.clone() }</label>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("wide");
        let rendered = class_list(&["control", "control-select"], &extra).to_string();
        assert!(rendered.contains("control"));
        assert!(rendered.contains("control-select"));
        assert!(rendered.contains("wide"));
    }

    #[test]
    fn control_group_labels_its_input() {
        let props = ControlGroupProps {
            label: AttrValue::from("Position"),
            input_id: Some(AttrValue::from("position-select")),
            children: Children::default(),
        };
        let html = block_on(LocalServerRenderer::<ControlGroup>::with_props(props).render());
        assert!(html.contains("control-group"));
        assert!(html.contains("for=\"position-select\""));
        assert!(html.contains("Position"));
    }
}
