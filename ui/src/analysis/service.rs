use async_trait::async_trait;

use crate::core::errors::RemoteError;

/// One completion request: prompt in, text out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    /// Ask the service to ground its answer with live web search results.
    pub web_search: bool,
}

/// Seam between the lifecycle and whatever produces completions.
///
/// Futures are not required to be `Send`: in the browser the HTTP client is
/// backed by `fetch` and lives on the single UI thread.
#[async_trait(?Send)]
pub trait GenerativeTextService {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, RemoteError>;
}
