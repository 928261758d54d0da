//! Runtime configuration for the generative-text service.
//!
//! The API key is mandatory. On native targets it is read from the process
//! environment first and falls back to the value baked in at compile time;
//! WASM builds only have the compile-time value (the browser has no
//! environment to read).

use crate::core::errors::ConfigError;

pub const API_KEY_VAR: &str = "API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const ENDPOINT_VAR: &str = "GEMINI_ENDPOINT";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl std::fmt::Debug for AnalyzerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl AnalyzerConfig {
    /// Load from the environment. A missing key is an error the launcher treats as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Load through an arbitrary variable lookup (used by tests and by `from_env`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let model = optional(&lookup, MODEL_VAR)?.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let endpoint = optional(&lookup, ENDPOINT_VAR)?
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            model,
            endpoint,
        })
    }
}

/// Optional variables may be absent, but a present-yet-blank value is a mistake worth reporting.
fn optional<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => {
            let value = raw.trim();
            if value.is_empty() {
                Err(ConfigError::Empty(name))
            } else {
                Ok(Some(value.to_string()))
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .or_else(|| compile_time_value(name).map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn env_lookup(name: &str) -> Option<String> {
    compile_time_value(name).map(str::to_string)
}

fn compile_time_value(name: &str) -> Option<&'static str> {
    match name {
        API_KEY_VAR => option_env!("API_KEY"),
        MODEL_VAR => option_env!("GEMINI_MODEL"),
        ENDPOINT_VAR => option_env!("GEMINI_ENDPOINT"),
        _ => None,
    }
}
