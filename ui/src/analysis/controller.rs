//! Request lifecycle for a profile analysis.
//!
//! `update` is pure: it applies a [`Msg`] to an [`AnalyzerState`] and returns
//! the effects to run. The only effect is a single completion request, which
//! [`perform`] turns back into a [`Msg::CompletionSettled`].

use tracing::{debug, error, info, warn};

use super::service::{CompletionRequest, GenerativeTextService};
use crate::core::errors::RemoteError;
use crate::core::markdown::render_markdown;
use crate::core::prompt::build_prompt;
use crate::core::validation::validate_profile_url;
use crate::t;

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub profile_url: String,
}

impl ProfileForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            profile_url: profile_url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
}

/// Fixed user-facing messages. Localized only when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidUrl,
    AnalysisFailed,
}

impl Notice {
    pub fn message(&self) -> String {
        crate::i18n::init();
        match self {
            Notice::InvalidUrl => t!("error-invalid-url"),
            Notice::AnalysisFailed => t!("error-analysis-failed"),
        }
    }
}

/// Contents of the result container. Each transition replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultArea {
    #[default]
    Empty,
    Loading,
    Rendered(String),
    Notice(Notice),
}

impl ResultArea {
    /// Whether the container shows a result or an error (the `has-content` flag).
    pub fn is_populated(&self) -> bool {
        matches!(self, ResultArea::Rendered(_) | ResultArea::Notice(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerState {
    pub form: ProfileForm,
    pub request: RequestState,
    pub result: ResultArea,
    model: String,
}

impl AnalyzerState {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            form: ProfileForm::default(),
            request: RequestState::Idle,
            result: ResultArea::Empty,
            model: model.into(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request == RequestState::Loading
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn trigger_label(&self) -> String {
        crate::i18n::init();
        if self.is_loading() {
            t!("button-analyzing")
        } else {
            t!("button-analyze")
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    FirstNameChanged(String),
    LastNameChanged(String),
    ProfileUrlChanged(String),
    SubmitRequested,
    CompletionSettled(Result<String, RemoteError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestCompletion(CompletionRequest),
}

/// Ways the user can ask for an analysis. All of them submit the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Button,
    EnterKey,
}

impl From<Trigger> for Msg {
    fn from(_: Trigger) -> Self {
        Msg::SubmitRequested
    }
}

/// Map a key name (as reported by the DOM `KeyboardEvent.key`) to a trigger.
pub fn submit_trigger_for_key(key: &str) -> Option<Trigger> {
    (key == "Enter").then_some(Trigger::EnterKey)
}

pub fn update(mut state: AnalyzerState, msg: Msg) -> (AnalyzerState, Vec<Effect>) {
    let effects = match msg {
        Msg::FirstNameChanged(value) => {
            state.form.first_name = value;
            Vec::new()
        }
        Msg::LastNameChanged(value) => {
            state.form.last_name = value;
            Vec::new()
        }
        Msg::ProfileUrlChanged(value) => {
            state.form.profile_url = value;
            Vec::new()
        }
        Msg::SubmitRequested => {
            if state.is_loading() {
                debug!("submit ignored: a request is already in flight");
                return (state, Vec::new());
            }
            match validate_profile_url(&state.form.profile_url) {
                Err(err) => {
                    debug!(%err, "profile URL rejected");
                    state.result = ResultArea::Notice(Notice::InvalidUrl);
                    Vec::new()
                }
                Ok(url) => {
                    let prompt = build_prompt(url, &state.form.first_name, &state.form.last_name);
                    info!(%url, "starting profile analysis");
                    let request = CompletionRequest {
                        model: state.model.clone(),
                        prompt,
                        web_search: true,
                    };
                    state.request = RequestState::Loading;
                    state.result = ResultArea::Loading;
                    vec![Effect::RequestCompletion(request)]
                }
            }
        }
        Msg::CompletionSettled(outcome) => {
            if !state.is_loading() {
                warn!("completion settled with no request in flight; ignoring");
                return (state, Vec::new());
            }
            state.result = match outcome {
                Ok(markdown) => ResultArea::Rendered(render_markdown(&markdown)),
                Err(_) => ResultArea::Notice(Notice::AnalysisFailed),
            };
            state.request = RequestState::Idle;
            Vec::new()
        }
    };

    (state, effects)
}

/// Run an effect against the service and produce the message that settles it.
pub async fn perform<S>(effect: Effect, service: &S) -> Msg
where
    S: GenerativeTextService + ?Sized,
{
    match effect {
        Effect::RequestCompletion(request) => {
            let outcome = service.generate(&request).await;
            match &outcome {
                Ok(text) => info!(bytes = text.len(), "profile analysis completed"),
                Err(err) => error!(%err, "error analyzing profile"),
            }
            Msg::CompletionSettled(outcome)
        }
    }
}

/// Drive one full submit of `form` to completion, without a UI.
pub async fn analyze_once<S>(form: ProfileForm, model: &str, service: &S) -> AnalyzerState
where
    S: GenerativeTextService + ?Sized,
{
    let state = AnalyzerState {
        form,
        ..AnalyzerState::new(model)
    };
    let (mut state, mut pending) = update(state, Msg::SubmitRequested);
    while let Some(effect) = pending.pop() {
        let settled = perform(effect, service).await;
        let (next, more) = update(state, settled);
        state = next;
        pending.extend(more);
    }
    state
}
