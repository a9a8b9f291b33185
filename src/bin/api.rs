use marketing_agent_orchestrator::{
    agent::Orchestrator,
    api::start_server,
    gemini::GeminiClient,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Absence of the credential is the normal sample-mode path, not an error.
    let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();

    let api_port: u16 = std::env::var("PORT")
        .or_else(|_| std::env::var("API_PORT"))
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    info!("Marketing Agent Orchestrator - API Server");
    info!("Port: {}", api_port);

    let backend = GeminiClient::new(gemini_api_key);
    if backend.is_configured() {
        info!("Generation backend: Gemini");
    } else {
        info!("Generation backend: none configured, serving the sample plan");
    }

    let orchestrator = Arc::new(Orchestrator::new(Box::new(backend)));

    info!("Orchestrator initialized");
    info!("Starting API server...");

    start_server(orchestrator, api_port).await?;

    Ok(())
}
