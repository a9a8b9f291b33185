//! Error types for the marketing agent orchestrator

use serde::Serialize;
use thiserror::Error;

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// One violated field constraint, reported back to the caller verbatim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AgentError {

    // =============================
    // Core Pipeline Errors
    // =============================

    /// Caller-caused; the only error category that surfaces instead of
    /// degrading to the sample plan. Carries every violated constraint.
    #[error("invalid brief: {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// No backend credential configured. The expected sample-mode path.
    #[error("generation backend not configured")]
    BackendUnavailable,

    #[error("generation backend error: {0}")]
    BackendError(String),

    #[error("malformed plan from backend: {0}")]
    MalformedPlan(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
