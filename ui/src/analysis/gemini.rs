//! Google Gemini `generateContent` client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::service::{CompletionRequest, GenerativeTextService};
use crate::core::config::AnalyzerConfig;
use crate::core::errors::RemoteError;

const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiClient {
    http: reqwest::Client,
    config: AnalyzerConfig,
}

impl GeminiClient {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.config.endpoint)
    }
}

#[async_trait(?Send)]
impl GenerativeTextService for GeminiClient {
    async fn generate(&self, request: &CompletionRequest) -> Result<String, RemoteError> {
        let url = self.generate_url(&request.model);
        debug!(%url, web_search = request.web_search, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&GenerateContentRequest::from(request))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Turn a raw HTTP status + body into the response text or a [`RemoteError`].
fn decode_response(status: u16, body: &str) -> Result<String, RemoteError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| match envelope.error.status {
                Some(code) => format!("{code}: {}", envelope.error.message),
                None => envelope.error.message,
            })
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(RemoteError::Api { status, message });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    parsed.text().ok_or(RemoteError::EmptyResponse)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

impl<'a> From<&'a CompletionRequest> for GenerateContentRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        let tools = if request.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: &request.prompt,
                }],
            }],
            tools,
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, skipping thought parts.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    status: Option<String>,
}
