use tipbox_core::{
    Animation, Appearance, HexColor, Position, Shape, TooltipState, Trigger, TriggerEvent,
    TriggerGeometry, animation_class,
};
use web_sys::{FocusEvent, KeyboardEvent, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipProps {
    pub content: AttrValue,
    #[prop_or_default]
    pub trigger: Trigger,
    #[prop_or_default]
    pub position: Position,
    #[prop_or_default]
    pub shape: Shape,
    #[prop_or_else(HexColor::default_background)]
    pub background_color: HexColor,
    #[prop_or_else(HexColor::default_text)]
    pub text_color: HexColor,
    #[prop_or(200)]
    pub width: u16,
    #[prop_or(14)]
    pub font_size: u16,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub animation: Animation,
    /// Authoritative visibility supplied by the owner; `None` lets the widget
    /// manage itself.
    #[prop_or_default]
    pub visible: Option<bool>,
    #[prop_or_default]
    pub on_visibility_change: Callback<bool>,
    #[prop_or(AttrValue::Static("tooltip"))]
    pub overlay_id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

impl TooltipProps {
    fn appearance(&self) -> Appearance {
        Appearance {
            position: self.position,
            shape: self.shape,
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
            width: self.width,
            font_size: self.font_size,
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn measure(node: &NodeRef) -> Option<TriggerGeometry> {
    node.cast::<web_sys::Element>()
        .and_then(|el| crate::dom::measure(&el))
}

#[cfg(not(target_arch = "wasm32"))]
fn measure(node: &NodeRef) -> Option<TriggerGeometry> {
    let _ = node;
    None
}

/// Enter and Space activate the trigger like a click.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

fn dispatch_handler(
    state: &UseStateHandle<TooltipState>,
    trigger_ref: &NodeRef,
    props: &TooltipProps,
) -> Callback<TriggerEvent> {
    let state = state.clone();
    let trigger_ref = trigger_ref.clone();
    let trigger = props.trigger;
    let position = props.position;
    let on_change = props.on_visibility_change.clone();
    Callback::from(move |event: TriggerEvent| {
        let mut next = (*state).clone();
        if let Some(visible) = next.handle(event, trigger, position, measure(&trigger_ref)) {
            log::debug!("tooltip {trigger} trigger: {event:?} -> visible={visible}");
            state.set(next);
            on_change.emit(visible);
        }
    })
}

fn keydown_handler(dispatch: Callback<TriggerEvent>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if is_activation_key(&e.key()) {
            e.prevent_default();
            dispatch.emit(TriggerEvent::KeyActivate);
        }
    })
}

fn render_overlay(props: &TooltipProps, state: &TooltipState) -> Html {
    if !state.is_visible() {
        return Html::default();
    }
    let look = props.appearance();
    let style = look.overlay_style(state.anchor().unwrap_or_default());
    let class = animation_class(props.animation);
    html! {
        <div id={props.overlay_id.clone()} role="tooltip" aria-live="polite" {class} {style}>
            { look.arrow_style().map(|arrow| html! {
                <div class="tooltip-arrow" style={arrow} aria-hidden="true"></div>
            }).unwrap_or_default() }
            { props.icon.as_ref().map(|icon| html! {
                <span class="tooltip-icon">{ icon.clone() }</span>
            }).unwrap_or_default() }
            <span class="tooltip-content">{ props.content.clone() }</span>
        </div>
    }
}

#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let trigger_ref = use_node_ref();
    let state = {
        let pinned = props.visible;
        let position = props.position;
        use_state(move || {
            let mut initial = TooltipState::new();
            initial.pin(pinned, position, None);
            initial
        })
    };

    {
        let state = state.clone();
        let trigger_ref = trigger_ref.clone();
        let position = props.position;
        use_effect_with(props.visible, move |pinned| {
            let mut next = (*state).clone();
            // Owner-driven changes are not echoed to `on_visibility_change`.
            next.pin(*pinned, position, measure(&trigger_ref));
            if next != *state {
                state.set(next);
            }
            || ()
        });
    }
    {
        let state = state.clone();
        let trigger_ref = trigger_ref.clone();
        use_effect_with(props.position, move |position| {
            let mut next = (*state).clone();
            next.reposition(*position, measure(&trigger_ref));
            if next != *state {
                state.set(next);
            }
            || ()
        });
    }

    let dispatch = dispatch_handler(&state, &trigger_ref, props);
    let onmouseenter = dispatch.reform(|_: MouseEvent| TriggerEvent::PointerEnter);
    let onmouseleave = dispatch.reform(|_: MouseEvent| TriggerEvent::PointerLeave);
    let onfocusin = dispatch.reform(|_: FocusEvent| TriggerEvent::Focus);
    let onfocusout = dispatch.reform(|_: FocusEvent| TriggerEvent::Blur);
    let onclick = dispatch.reform(|_: MouseEvent| TriggerEvent::Click);
    let onkeydown = keydown_handler(dispatch);

    let tabindex = (props.trigger == Trigger::Focus).then(|| AttrValue::from("0"));
    let role = (props.trigger == Trigger::Click).then(|| AttrValue::from("button"));
    let describedby = state.is_visible().then(|| props.overlay_id.clone());

    html! {
        <>
            <div
                ref={trigger_ref}
                class="tooltip-trigger"
                style="display:inline-block;cursor:pointer"
                {tabindex}
                {role}
                aria-describedby={describedby}
                {onmouseenter}
                {onmouseleave}
                {onfocusin}
                {onfocusout}
                {onclick}
                {onkeydown}
            >
                { for props.children.iter() }
            </div>
            { render_overlay(props, &state) }
        </>
    }
}
