//! Gemini Generation Backend Adapter
//!
//! Renders a prompt to free text via the Gemini API.
//! Uses a long-lived reqwest::Client for connection pooling.

use crate::backend::GenerationBackend;
use crate::error::AgentError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

const SYSTEM_INSTRUCTION: &str =
    "You are a marketing planning engine. You convert campaign briefs into a single \
     structured JSON plan and respond with JSON only.";

/// Reusable Gemini client (connection-pooled).
///
/// The credential is injected at construction; `None` means sample mode and
/// every call short-circuits with `BackendUnavailable` before any network I/O.
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent".to_string(),
        }
    }

    /// Whether a credential is configured (i.e. live generation is possible).
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, prompt: &str, max_output_tokens: u32) -> crate::Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(AgentError::BackendUnavailable);
        };

        let url = format!("{}?key={}", self.base_url, api_key);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.3,
                top_p: 0.9,
                top_k: 40,
                max_output_tokens,
            },
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
        };

        info!("Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                AgentError::BackendError(format!("Gemini API error: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error response: {}", error_text);
            return Err(AgentError::BackendError(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response envelope: {}", e);
            AgentError::BackendError(format!("Gemini envelope parse error: {}", e))
        })?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| AgentError::BackendError("Empty response from Gemini".to_string()))?;

        info!("Gemini response received ({} bytes)", text.len());

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    system_instruction: SystemInstruction,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    max_output_tokens: u32,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Create a marketing plan".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.3,
                top_p: 0.9,
                top_k: 40,
                max_output_tokens: 2048,
            },
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
        };

        let json = serde_json::to_string(&request);
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Create a marketing plan"));
    }

    #[test]
    fn test_missing_credential_is_unconfigured() {
        assert!(!GeminiClient::new(None).is_configured());
        assert!(!GeminiClient::new(Some("  ".to_string())).is_configured());
        assert!(GeminiClient::new(Some("key".to_string())).is_configured());
    }

    #[tokio::test]
    async fn test_unconfigured_client_short_circuits() {
        let client = GeminiClient::new(None);
        let result = client.generate("prompt", 2048).await;
        assert!(matches!(result, Err(AgentError::BackendUnavailable)));
    }
}
