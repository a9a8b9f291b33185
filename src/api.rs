//! REST API Server for the Marketing Agent Orchestrator
//!
//! Exposes the brief-to-plan pipeline via HTTP endpoints
//! Integrates with frontend UI

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::agent::Orchestrator;
use crate::error::AgentError;

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub orchestrator: Arc<Orchestrator>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Main Agent Endpoint
/// =============================

/// `POST /api/agent`, body is the Brief wire shape.
///
/// - valid brief  → 200 with an `AgentResponse`
/// - invalid brief → 400 with `{error, issues: [{field, message}]}`
/// - anything else past validation → 200 fallback response; 500 only if even
///   the response fails to serialize
async fn run_agent(
    State(state): State<ApiState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    info!("Received agent request");

    match state.orchestrator.run(&body).await {
        Ok(response) => match serde_json::to_value(&response) {
            Ok(value) => (StatusCode::OK, Json(value)),
            Err(e) => {
                error!("Failed to serialize agent response: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to serialize response" })),
                )
            }
        },
        Err(AgentError::Validation(issues)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Invalid brief",
                "issues": issues,
            })),
        ),
        // `run` only fails with Validation; cover the rest of the taxonomy
        // anyway so no internal error ever leaks past this boundary.
        Err(e) => {
            error!("Unexpected orchestrator error, serving sample plan: {}", e);
            let fallback = crate::agent::fallback_response();
            match serde_json::to_value(&fallback) {
                Ok(value) => (StatusCode::OK, Json(value)),
                Err(e) => {
                    error!("Failed to serialize fallback response: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "Failed to construct fallback plan" })),
                    )
                }
            }
        }
    }
}

/// =============================
/// Router
/// =============================

pub fn create_router(orchestrator: Arc<Orchestrator>) -> Router {
    let state = ApiState { orchestrator };

    Router::new()
        .route("/health", axum::routing::get(health))
        .route("/api/agent", post(run_agent))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    orchestrator: Arc<Orchestrator>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(orchestrator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
