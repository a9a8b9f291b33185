//! Marketing Agent Orchestrator
//!
//! Turns a structured marketing brief into a six-section operational plan:
//! - Validates the brief and reports every violated constraint at once
//! - Derives short media tokens so attachment payloads never inflate prompts
//! - Deterministically renders the generation prompt
//! - Invokes a Gemini backend when a credential is configured
//! - Parses the structured output strictly, with no silent defaults
//! - Degrades to a fixed sample plan on any post-validation failure
//!
//! PIPELINE:
//! BRIEF → VALIDATE → MEDIA TOKENS → PROMPT → GENERATE → PARSE → RESPONSE

pub mod agent;
pub mod api;
pub mod backend;
pub mod error;
pub mod gemini;
pub mod media;
pub mod models;
pub mod parser;
pub mod prompt;
pub mod sample;
pub mod validator;

pub use error::Result;

// Re-export common types
pub use models::*;
