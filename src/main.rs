use anyhow::Context;
use clap::Parser;
use copy_gateway::config::Config;
use copy_gateway::provider::OpenAiClient;
use copy_gateway::startup::build_router;
use copy_gateway::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // flags win over PORT, OPENAI_API_KEY and friends
    let config = Config::parse();

    let provider = OpenAiClient::new(
        &config.openai_base_url,
        config.openai_api_key.clone(),
        config.model.clone(),
        config.provider_timeout(),
    )
    .context("failed to build completion provider client")?;

    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is empty, completion calls will be rejected by the provider");
    }
    tracing::info!(endpoint = %provider.endpoint(), model = %provider.model(), "completion provider configured");

    let state = Arc::new(AppState::new(Arc::new(provider)));
    let app = build_router(state, &config.static_dir);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Copy gateway running on http://{}", addr);
    tracing::info!(static_dir = %config.static_dir.display(), "serving front-end assets");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
