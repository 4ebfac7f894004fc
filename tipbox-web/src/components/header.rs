use crate::app::state::ColorScheme;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub scheme: ColorScheme,
    pub on_toggle_scheme: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let onclick = {
        let cb = p.on_toggle_scheme.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <header class="header" role="banner">
            <h1>{ "🛠️ Tooltips Sandbox" }</h1>
            <button class="theme-toggle" {onclick} aria-label="Toggle theme">
                { p.scheme.toggle_icon() }
            </button>
        </header>
    }
}
