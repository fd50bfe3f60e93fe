// SPDX-License-Identifier: MIT

//! Typed error handling for startup-sage
//!
//! Loader, advisor and CLI paths return [`SageError`]. Condition parsing has
//! its own [`ConditionError`] because a bad condition is never fatal: the
//! scanners record it and move on.

use thiserror::Error;

/// Top-level error type for startup-sage
#[derive(Debug, Error)]
pub enum SageError {
    /// API errors from the model provider
    #[error("API error from {provider}: {message}")]
    Api { provider: String, message: String },

    /// Lookup by id failed (question, badge, ...)
    #[error("{kind} with ID '{id}' not found")]
    NotFound { kind: String, id: String },

    /// Configuration errors (missing env vars, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model-specific errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Malformed condition surfaced outside a scan
    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    /// Answer rejected by the wizard
    #[error("Invalid answer for '{question}': {reason}")]
    InvalidAnswer { question: String, reason: String },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error wrapper for compatibility
    #[error("{0}")]
    Other(String),
}

/// Model/LLM-specific errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// API key not configured
    #[error("API key not configured for provider: {0}")]
    ApiKeyMissing(String),

    /// Invalid response from model
    #[error("Invalid response from model: {0}")]
    InvalidResponse(String),
}

/// Reasons a condition string could not be turned into a comparison
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("empty condition")]
    Empty,

    #[error("no comparison operator in '{0}'")]
    MissingOperator(String),

    #[error("missing operand in '{0}'")]
    MissingOperand(String),

    #[error("more than one comparison in '{0}'")]
    MultipleOperators(String),

    #[error("invalid operand '{operand}' in '{condition}'")]
    InvalidOperand { operand: String, condition: String },

    #[error("operator '{op}' is not allowed here: '{condition}'")]
    UnsupportedOperator { op: String, condition: String },
}

impl SageError {
    /// Create an API error
    pub fn api(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid answer error
    pub fn invalid_answer(question: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAnswer {
            question: question.into(),
            reason: reason.into(),
        }
    }
}

// Model calls return boxed errors
impl From<Box<dyn std::error::Error + Send + Sync>> for SageError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Other(err.to_string())
    }
}
