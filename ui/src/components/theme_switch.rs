use dioxus::prelude::*;

use crate::core::theme::Theme;
use crate::i18n;
use crate::t;

/// Sun/moon switch flipping between light and dark.
#[component]
pub fn ThemeSwitch(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    let _locale = i18n::use_locale();
    let dark = theme.is_dark();
    let track_class = if dark {
        "theme-switch__track theme-switch__track--on"
    } else {
        "theme-switch__track"
    };
    let label = t!("theme-toggle-label");

    rsx! {
        div { class: "theme-switch",
            span { class: "theme-switch__icon", aria_hidden: "true", "☀" }
            button {
                r#type: "button",
                role: "switch",
                class: track_class,
                aria_checked: "{dark}",
                aria_label: "{label}",
                onclick: move |_| on_toggle.call(()),
                span { class: "theme-switch__thumb" }
            }
            span { class: "theme-switch__icon", aria_hidden: "true", "☾" }
        }
    }
}
