#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
use dioxus::desktop::Config;
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::config::AnalyzerConfig;
use ui::i18n;
use ui::views::Analyze;

fn main() {
    let config = match AnalyzerConfig::from_env() {
        Ok(config) => config,
        Err(err) => panic!("cannot start ProfileScope: {err}"),
    };

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("ProfileScope – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(960.0, 820.0)),
            ),
        )
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Desktop always inlines the shared theme (no asset server in packaged builds).
        document::Style { "{ui::THEME_CSS_INLINE}" }

        AppHeader {}
        main { Analyze {} }
    }
}
