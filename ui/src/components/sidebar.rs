use dioxus::prelude::*;

use crate::components::LocaleSwitcher;
use crate::core::{tab::Tab, theme::Theme};
use crate::i18n;
use crate::t;

/// Fixed navigation menu. Reporting the chosen tab through `on_change` is its
/// only side effect.
#[component]
pub fn NavigationSidebar(active: Tab, theme: Theme, on_change: EventHandler<Tab>) -> Element {
    let _locale = i18n::use_locale();

    rsx! {
        aside { class: theme.class("sidebar"),
            nav { class: "sidebar__items", aria_label: t!("sidebar-label"),
                for tab in Tab::ALL {
                    button {
                        key: "{tab.id()}",
                        r#type: "button",
                        class: item_class(tab == active, theme),
                        onclick: move |_| on_change.call(tab),
                        span { class: "sidebar__icon", aria_hidden: "true", "{tab.icon()}" }
                        span { class: "sidebar__text", "{tab.label()}" }
                    }
                }
            }
            div { class: "sidebar__footer", LocaleSwitcher {} }
        }
    }
}

fn item_class(active: bool, theme: Theme) -> String {
    let mut class = theme.class("sidebar__item");
    if active {
        class.push_str(" sidebar__item--active");
    }
    class
}
