use dioxus::prelude::*;

use crate::i18n;
use crate::t;

/// Language picker, hidden when only one locale is embedded.
///
/// A successful switch is pushed into the platform's shared `Signal<String>`
/// (if provided) so every component calling `use_locale` re-renders.
#[component]
pub fn LocaleSwitcher() -> Element {
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    if langs().len() < 2 {
        return rsx! {};
    }

    rsx! {
        div { class: "locale-switcher",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                class: "locale-switcher__select",
                value: "{current_lang()}",
                oninput: on_change,
                for code in langs().into_iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
