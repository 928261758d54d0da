//! Platform-agnostic building blocks for the analyzer: configuration, error
//! types, input validation, prompt construction and markdown rendering.

pub mod config;
pub mod errors;
pub mod markdown;
pub mod prompt;
pub mod validation;
