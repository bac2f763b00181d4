use anyhow::{Context, Result};
use clap::Parser;
use rendezvous::config::Config;
use rendezvous::router;
use rendezvous::server::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_new(&config.log)
        .with_context(|| format!("invalid log filter {:?}", config.log))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Initializing rendezvous relay...");

    let app = router(AppState::new());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Signaling server listening on http://{}", config.bind);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
