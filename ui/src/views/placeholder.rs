use dioxus::prelude::*;

use crate::core::theme::Theme;

/// Static panel shown for sections that are not built yet.
#[component]
pub fn ComingSoon(message: String, theme: Theme) -> Element {
    rsx! {
        section { class: theme.class("placeholder"),
            p { class: "placeholder__message", "{message}" }
        }
    }
}
