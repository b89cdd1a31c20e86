use dioxus::prelude::*;

use crate::core::format::{creator_label, flow_label};
use crate::core::{step::Step, theme::Theme};
use crate::i18n;
use crate::t;

/// One library entry: a clickable summary row and, when expanded, the step's
/// metadata and source snippet.
///
/// `on_toggle` and `on_use` both receive the step id.
#[component]
pub fn StepCard(
    step: Step,
    expanded: bool,
    theme: Theme,
    on_toggle: EventHandler<String>,
    on_use: EventHandler<String>,
) -> Element {
    let _locale = i18n::use_locale();

    let toggle_id = step.id.clone();
    let key_toggle_id = step.id.clone();
    let use_id = step.id.clone();
    let creator = creator_label(step.creator.as_deref(), expanded);
    let flow = flow_label(&step.inputs, &step.outputs);
    let chevron_class = if expanded {
        "step-card__chevron step-card__chevron--open"
    } else {
        "step-card__chevron"
    };
    let label_class = theme.class("step-card__label");

    rsx! {
        article { class: theme.class("step-card"),
            div {
                class: "step-card__header",
                role: "button",
                tabindex: 0,
                aria_expanded: "{expanded}",
                onclick: move |_| on_toggle.call(toggle_id.clone()),
                onkeydown: move |evt: KeyboardEvent| {
                    if is_activation_key(&evt.key().to_string()) {
                        evt.prevent_default();
                        on_toggle.call(key_toggle_id.clone());
                    }
                },

                div { class: "step-card__summary",
                    div { class: "step-card__title-row",
                        h3 { class: "step-card__name", "{step.name}" }
                        span { class: theme.class("step-card__badge"), "{step.framework}" }
                    }
                    div { class: theme.class("step-card__meta"),
                        span { "{flow}" }
                    }
                }

                div { class: theme.class("step-card__stats"),
                    span { class: "step-card__stat", title: t!("step-downloads-label"),
                        span { aria_hidden: "true", "⤓" }
                        span { "{step.downloads}" }
                    }
                    span { class: "step-card__stat", title: t!("step-creator-label"),
                        span { aria_hidden: "true", "◔" }
                        span { class: "step-card__creator", "{creator}" }
                    }
                    span { class: chevron_class, aria_hidden: "true", "›" }
                }
            }

            if expanded {
                div { class: theme.class("step-card__detail"),
                    dl { class: "step-card__facts",
                        div {
                            dt { class: label_class.clone(), {t!("step-input-type")} }
                            dd { "{step.inputs}" }
                        }
                        div {
                            dt { class: label_class.clone(), {t!("step-output-type")} }
                            dd { "{step.outputs}" }
                        }
                        div {
                            dt { class: label_class.clone(), {t!("step-framework")} }
                            dd { "{step.framework}" }
                        }
                    }

                    div { class: "step-card__implementation",
                        div { class: "step-card__implementation-header",
                            h4 { class: label_class.clone(),
                                span { aria_hidden: "true", "</> " }
                                {t!("step-implementation")}
                            }
                            button {
                                r#type: "button",
                                class: theme.class("step-card__use"),
                                onclick: move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    on_use.call(use_id.clone());
                                },
                                span { aria_hidden: "true", ">_ " }
                                {t!("step-use")}
                            }
                        }
                        pre { class: theme.class("step-card__code"),
                            code { "{step.code}" }
                        }
                    }
                }
            }
        }
    }
}

/// Enter and Space activate the header like a native button.
fn is_activation_key(key: &str) -> bool {
    matches!(
        key.to_lowercase().as_str(),
        "enter" | " " | "space" | "spacebar"
    )
}
