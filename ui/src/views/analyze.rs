use dioxus::prelude::*;

use crate::analysis::AnalyzerView;

#[component]
pub fn Analyze() -> Element {
    // Subscribe to the global language code (if provided) so the page copy
    // re-renders when the locale changes.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-analyze",
            h1 { {crate::t!("page-analyze-title")} }
            p { class: "page-analyze__intro", {crate::t!("page-analyze-intro")} }
            AnalyzerView {}
        }
    }
}
