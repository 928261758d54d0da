//! Error types. The UI never shows these directly: validation failures and
//! remote failures both collapse into a localized [`crate::analysis::Notice`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API_KEY environment variable not set")]
    MissingApiKey,

    #[error("{0} is set but empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("profile URL is empty")]
    MissingUrl,

    #[error("profile URL does not point at {expected}: {url}")]
    WrongDomain { url: String, expected: &'static str },
}

/// Any failure talking to the generative-text service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not decode service response: {0}")]
    Decode(String),

    #[error("service response contained no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Decode(err.to_string())
    }
}
