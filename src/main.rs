use std::sync::Arc;

use anyhow::Context;
use chat_widget::{config::Config, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let bind_addr = config.bind_addr;
    tracing::info!(webhook = %config.webhook_url, store = %config.session_store_path.display(), "starting chat widget");

    let state = Arc::new(AppState::from_config(config).context("failed to set up chat widget")?);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("chat widget running at http://{bind_addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
