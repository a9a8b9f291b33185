//! Generation backend trait and test doubles
//!
//! The orchestrator only sees "renders prompt to free text under a token
//! ceiling"; which model answers is the adapter's business. Injecting the
//! backend at construction keeps the orchestrator trivially testable.

use crate::error::AgentError;
use crate::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Trait for text generation backends.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Render the prompt to free text, bounded by `max_output_tokens`.
    ///
    /// Fails with `BackendUnavailable` when no credential is configured
    /// (before any network I/O) and `BackendError` for upstream faults.
    async fn generate(&self, prompt: &str, max_output_tokens: u32) -> Result<String>;
}

enum MockOutcome {
    Respond(String),
    Unavailable,
    Fail(String),
}

/// Scripted backend for development & testing.
/// Keeps the pipeline functional without LLM dependency.
pub struct MockBackend {
    outcome: MockOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Respond(text.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            outcome: MockOutcome::Unavailable,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Fail(message.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared probe for how many times `generate` was invoked, usable after
    /// the backend has been boxed into an orchestrator.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(&self, _prompt: &str, _max_output_tokens: u32) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Respond(text) => Ok(text.clone()),
            MockOutcome::Unavailable => Err(AgentError::BackendUnavailable),
            MockOutcome::Fail(message) => Err(AgentError::BackendError(message.clone())),
        }
    }
}
