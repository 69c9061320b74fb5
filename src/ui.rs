use crate::theme::{BASE_CSS, theme_definition};
use crate::types::ThemeMode;
use crate::views::ChatView;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    let theme = use_signal(|| ThemeMode::Light);

    rsx! {
        ThemeStyles { theme }
        div { class: "widget-shell",
            div { class: "widget-header", "Concierge" }
            ChatView {}
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        style { dangerous_inner_html: "{BASE_CSS}" }
        style { dangerous_inner_html: "{definition.css}" }
    }
}
