//! Main orchestrator - implements the brief-to-plan pipeline
//!
//! VALIDATE -> DERIVE MEDIA TOKENS -> BUILD PROMPT -> GENERATE -> PARSE -> DONE
//!
//! Every post-validation failure degrades to the sample plan; only validation
//! errors surface to the caller.

use crate::backend::GenerationBackend;
use crate::error::AgentError;
use crate::media::derive_media_tokens;
use crate::models::{AgentResponse, Brief};
use crate::parser::parse_plan;
use crate::prompt::build_prompt;
use crate::sample::{sample_plan, sample_plan_raw};
use crate::validator::validate_brief;
use crate::Result;
use serde_json::Value;
use tracing::{info, warn};

/// Output ceiling handed to the backend; bounds how long a request can run.
pub const MAX_PLAN_TOKENS: u32 = 2048;

pub struct Orchestrator {
    backend: Box<dyn GenerationBackend>,
}

impl Orchestrator {
    pub fn new(backend: Box<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    /// Run the full pipeline on an untyped request body.
    ///
    /// Returns `Err` only for `AgentError::Validation`; once the brief is
    /// valid the caller always gets a usable `AgentResponse`.
    pub async fn run(&self, body: &Value) -> Result<AgentResponse> {
        let brief = validate_brief(body).map_err(AgentError::Validation)?;

        info!("Brief validated: {}", brief.objective);

        Ok(self.generate_plan(&brief).await)
    }

    /// Generate a plan for an already-validated brief, degrading to the
    /// sample plan on any failure.
    pub async fn generate_plan(&self, brief: &Brief) -> AgentResponse {
        match self.try_generate(brief).await {
            Ok(response) => response,
            Err(AgentError::BackendUnavailable) => {
                info!("No generation backend configured, serving sample plan");
                fallback_response()
            }
            Err(e) => {
                warn!("Plan generation failed, serving sample plan: {}", e);
                fallback_response()
            }
        }
    }

    async fn try_generate(&self, brief: &Brief) -> Result<AgentResponse> {
        let media_tokens = derive_media_tokens(&brief.media);
        let prompt = build_prompt(brief, &media_tokens);

        let raw = self.backend.generate(&prompt, MAX_PLAN_TOKENS).await?;
        let plan = parse_plan(&raw)?;

        Ok(AgentResponse {
            plan,
            raw,
            used_sample: false,
        })
    }
}

/// The fallback branch. Cannot fail: the sample plan is a process constant.
pub fn fallback_response() -> AgentResponse {
    AgentResponse {
        plan: sample_plan().clone(),
        raw: sample_plan_raw().to_string(),
        used_sample: true,
    }
}
