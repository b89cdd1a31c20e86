use dioxus::prelude::*;

use crate::components::{NavigationSidebar, StepCard, ThemeSwitch};
use crate::config::LibraryConfig;
use crate::core::filter::step_matches;
use crate::core::selection::toggle_expanded;
use crate::core::step::Step;
use crate::core::storage::PreferenceStore;
use crate::core::tab::Tab;
use crate::core::theme::Theme;
use crate::core::{format, platform, storage};
use crate::i18n;
use crate::net::api::{self, FetchError};
use crate::t;

use super::ComingSoon;

/// Page root. Owns the active tab, search term, expanded card, theme and the
/// fetched step list; everything below it is driven through props.
#[component]
pub fn StepLibrary() -> Element {
    i18n::init();
    let _locale = i18n::use_locale();
    let config = try_use_context::<LibraryConfig>().unwrap_or_default();

    let mut active_tab = use_signal(Tab::default);
    let mut search_term = use_signal(String::new);
    let mut expanded = use_signal(|| Option::<String>::None);
    let steps = use_signal(Vec::<Step>::new);

    let restore_key = config.theme_key.clone();
    let mut theme = use_signal(move || restore_theme(&restore_key));

    // One fetch per mount; failures leave the list empty.
    let source = config.source.clone();
    use_future(move || {
        let source = source.clone();
        let mut steps = steps;
        async move {
            steps.set(loaded_steps(api::load_steps(&source).await));
        }
    });

    let persist_key = config.theme_key.clone();
    let toggle_theme = move |_: ()| {
        let next = theme().toggled();
        theme.set(next);
        persist_theme(&persist_key, next);
    };

    let on_toggle = move |id: String| {
        let next = toggle_expanded(expanded().as_deref(), &id);
        expanded.set(next);
    };

    let on_use = move |id: String| copy_use_step_command(&id);

    let current_tab = active_tab();
    let current_theme = theme();
    let term = search_term();
    let expanded_id = expanded();
    let search_placeholder = t!("search-placeholder");

    let body = match current_tab.placeholder() {
        Some(message) => rsx! {
            ComingSoon { message, theme: current_theme }
        },
        None => {
            let cards = library_cards(&steps.read(), &term, expanded_id.as_deref());
            rsx! {
                div { class: "library__list",
                    for CardEntry { key, step, open } in cards {
                        StepCard {
                            key: "{key}",
                            step,
                            expanded: open,
                            theme: current_theme,
                            on_toggle,
                            on_use,
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: current_theme.class("library"),
            NavigationSidebar {
                active: current_tab,
                theme: current_theme,
                on_change: move |tab: Tab| active_tab.set(tab),
            }

            main { class: "library__main",
                header { class: "library__header",
                    h1 { class: "library__title", "{current_tab.label()}" }

                    div { class: "library__controls",
                        if current_tab == Tab::Library {
                            label { class: current_theme.class("library__search"),
                                span { class: "library__search-icon", aria_hidden: "true", "⌕" }
                                input {
                                    r#type: "search",
                                    class: "library__search-input",
                                    placeholder: "{search_placeholder}",
                                    value: "{term}",
                                    oninput: move |evt: FormEvent| search_term.set(evt.value()),
                                }
                            }
                        }
                        ThemeSwitch { theme: current_theme, on_toggle: toggle_theme }
                    }
                }

                {body}
            }
        }
    }
}

/// A visible card. Step ids are not guaranteed unique, so the render key
/// carries the step's position in the fetched list as well.
#[derive(Debug, Clone, PartialEq)]
struct CardEntry {
    key: String,
    step: Step,
    open: bool,
}

fn library_cards(steps: &[Step], term: &str, expanded: Option<&str>) -> Vec<CardEntry> {
    steps
        .iter()
        .enumerate()
        .filter(|(_, step)| step_matches(step, term))
        .map(|(index, step)| CardEntry {
            key: format!("{index}-{}", step.id),
            step: step.clone(),
            open: expanded == Some(step.id.as_str()),
        })
        .collect()
}

/// Fetch outcome as the list to show: failures are logged and leave it empty.
fn loaded_steps(result: Result<Vec<Step>, FetchError>) -> Vec<Step> {
    match result {
        Ok(fetched) => {
            tracing::debug!(count = fetched.len(), "step list loaded");
            fetched
        }
        Err(err) => {
            tracing::error!(%err, "failed to load steps");
            Vec::new()
        }
    }
}

fn restore_theme(key: &str) -> Theme {
    match storage::platform_store() {
        Ok(store) => stored_theme(&*store, key),
        Err(err) => {
            tracing::warn!(%err, "preference storage unavailable");
            Theme::default()
        }
    }
}

/// Stored theme, or light when nothing usable is stored.
fn stored_theme(store: &dyn PreferenceStore, key: &str) -> Theme {
    match storage::load_theme(store, key) {
        Ok(Some(theme)) => theme,
        Ok(None) => Theme::default(),
        Err(err) => {
            tracing::warn!(%err, key, "ignoring stored theme preference");
            Theme::default()
        }
    }
}

fn persist_theme(key: &str, theme: Theme) {
    let saved = storage::platform_store().and_then(|store| storage::save_theme(&*store, key, theme));
    if let Err(err) = saved {
        tracing::warn!(%err, key, "failed to persist theme preference");
    }
}

fn copy_use_step_command(step_id: &str) {
    let command = format::use_step_command(step_id);
    if let Err(err) = platform::copy_to_clipboard(&command) {
        tracing::warn!(%err, step_id, "clipboard write failed");
    }
    platform::notify(&t!("copy-confirmation"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::step::sample_steps;
    use crate::core::storage::MemoryStore;

    fn duplicated() -> Vec<Step> {
        let mut steps = sample_steps();
        let mut twin = steps[0].clone();
        twin.name = "Data Preprocessing v2".into();
        steps.push(twin);
        steps
    }

    #[test]
    fn duplicate_ids_get_distinct_keys() {
        let cards = library_cards(&duplicated(), "", None);
        assert_eq!(cards.len(), 3);
        let mut keys: Vec<_> = cards.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn keys_stay_stable_while_filtering() {
        let steps = duplicated();
        let all = library_cards(&steps, "", None);
        let filtered = library_cards(&steps, "v2", None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key, all[2].key);
    }

    #[test]
    fn only_the_expanded_id_is_open() {
        let cards = library_cards(&sample_steps(), "", Some("567-567-567-567"));
        let open: Vec<_> = cards.iter().filter(|c| c.open).map(|c| c.step.name.as_str()).collect();
        assert_eq!(open, vec!["Feature Extraction"]);
    }

    #[test]
    fn failed_fetch_leaves_list_empty() {
        assert!(loaded_steps(Err(FetchError::Status(503))).is_empty());
    }

    #[test]
    fn successful_fetch_is_shown_as_is() {
        assert_eq!(loaded_steps(Ok(sample_steps())), sample_steps());
    }

    #[test]
    fn stored_dark_preference_is_restored() {
        let store = MemoryStore::default();
        store.set("darkMode", "true").unwrap();
        assert_eq!(stored_theme(&store, "darkMode"), Theme::Dark);
    }

    #[test]
    fn unusable_preference_falls_back_to_light() {
        let store = MemoryStore::default();
        assert_eq!(stored_theme(&store, "darkMode"), Theme::Light);
        store.set("darkMode", "{").unwrap();
        assert_eq!(stored_theme(&store, "darkMode"), Theme::Light);
    }
}
