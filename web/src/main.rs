use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::config::AnalyzerConfig;
use ui::i18n;
use ui::views::Analyze;

fn main() {
    let config = match AnalyzerConfig::from_env() {
        Ok(config) => config,
        // No usable service without a key; refuse to start.
        Err(err) => panic!("cannot start ProfileScope: {err}"),
    };

    LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Global reactive language code; AppHeader writes it on selection.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "ProfileScope" }

        AppHeader {}
        main { Analyze {} }
    }
}
