use std::rc::Rc;

use dioxus::prelude::*;

use super::controller::{
    perform, submit_trigger_for_key, update, AnalyzerState, Msg, ProfileForm, ResultArea,
    Trigger,
};
use super::gemini::GeminiClient;
use crate::core::config::AnalyzerConfig;
use crate::t;

/// Form + result container. Expects an [`AnalyzerConfig`] in context.
#[component]
pub fn AnalyzerView() -> Element {
    // Re-render when the language changes elsewhere.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let config = use_context::<AnalyzerConfig>();
    let service = use_hook(|| Rc::new(GeminiClient::new(config.clone())));
    let mut state = use_signal(|| AnalyzerState::new(config.model.clone()));

    let dispatch = use_callback(move |msg: Msg| {
        let (next, effects) = update(state(), msg);
        state.set(next);

        for effect in effects {
            let service = service.clone();
            spawn(async move {
                let settled = perform(effect, &*service).await;
                let (next, _) = update(state(), settled);
                state.set(next);
            });
        }
    });

    let on_key = move |evt: KeyboardEvent| {
        if let Some(trigger) = submit_trigger_for_key(&evt.key().to_string()) {
            evt.prevent_default();
            dispatch.call(Msg::from(trigger));
        }
    };

    let snapshot = state();
    let ProfileForm {
        first_name,
        last_name,
        profile_url,
    } = snapshot.form.clone();
    let button_label = snapshot.trigger_label();
    let result_class = if snapshot.result.is_populated() {
        "analyzer__result has-content"
    } else {
        "analyzer__result"
    };

    let result_body = match &snapshot.result {
        ResultArea::Empty => rsx! {
            p { class: "analyzer__placeholder", {t!("result-placeholder")} }
        },
        ResultArea::Loading => rsx! {
            div { class: "loader", role: "status", aria_label: t!("loader-label") }
        },
        ResultArea::Rendered(html) => rsx! {
            div { class: "analyzer__report", dangerous_inner_html: "{html}" }
        },
        ResultArea::Notice(notice) => rsx! {
            p { class: "error", {notice.message()} }
        },
    };

    rsx! {
        article { class: "analyzer",
            div { class: "analyzer__fields",
                div { class: "analyzer__field",
                    label { r#for: "first-name", {t!("field-first-name")} }
                    input {
                        id: "first-name",
                        r#type: "text",
                        autocomplete: "given-name",
                        placeholder: t!("placeholder-first-name"),
                        value: "{first_name}",
                        oninput: move |evt: FormEvent| dispatch.call(Msg::FirstNameChanged(evt.value())),
                        onkeydown: on_key,
                    }
                }
                div { class: "analyzer__field",
                    label { r#for: "last-name", {t!("field-last-name")} }
                    input {
                        id: "last-name",
                        r#type: "text",
                        autocomplete: "family-name",
                        placeholder: t!("placeholder-last-name"),
                        value: "{last_name}",
                        oninput: move |evt: FormEvent| dispatch.call(Msg::LastNameChanged(evt.value())),
                        onkeydown: on_key,
                    }
                }
                div { class: "analyzer__field analyzer__field--wide",
                    label { r#for: "tiktok-url", {t!("field-profile-url")} }
                    input {
                        id: "tiktok-url",
                        r#type: "url",
                        inputmode: "url",
                        placeholder: t!("placeholder-profile-url"),
                        value: "{profile_url}",
                        oninput: move |evt: FormEvent| dispatch.call(Msg::ProfileUrlChanged(evt.value())),
                        onkeydown: on_key,
                    }
                }
            }

            div { class: "analyzer__actions",
                button {
                    id: "analyze-button",
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !snapshot.trigger_enabled(),
                    onclick: move |_| dispatch.call(Msg::from(Trigger::Button)),
                    "{button_label}"
                }
            }

            div {
                id: "result-container",
                class: "{result_class}",
                aria_live: "polite",
                aria_busy: snapshot.is_loading(),
                {result_body}
            }
        }
    }
}
