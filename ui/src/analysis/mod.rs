//! Profile analysis: the request lifecycle, the remote service seam and the view.

mod controller;
mod gemini;
mod service;
mod view;

pub use controller::{
    analyze_once, perform, submit_trigger_for_key, update, AnalyzerState, Effect, Msg, Notice,
    ProfileForm, RequestState, ResultArea, Trigger,
};
pub use gemini::GeminiClient;
pub use service::{CompletionRequest, GenerativeTextService};
pub use view::AnalyzerView;
