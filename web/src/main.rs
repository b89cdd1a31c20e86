use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::config::LibraryConfig;
use ui::views::StepLibrary;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(LibraryConfig::default);

    rsx! {
        document::Title { "Lychee Step Library" }
        document::Style { "{MAIN_CSS_INLINE}" }
        StepLibrary {}
    }
}
