//! Error types for wordgate-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a banned-word list or scanning text.
#[derive(Error, Debug)]
pub enum GateError {
    /// The banned-words document is not valid JSON, is not an object, or
    /// holds a non-string entry in `banned_words`.
    #[error("malformed banned-words document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The multi-pattern matcher could not be built from the word list.
    #[error("failed to build matcher: {0}")]
    Matcher(String),
}

/// Result type alias using [`GateError`].
pub type GateResult<T> = Result<T, GateError>;
