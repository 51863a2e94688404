//! FleetGate - Token-gated vehicle registry API
//! Mission: Issue admin session tokens and protect vehicle mutations

use anyhow::{Context, Result};
use dotenv::dotenv;
use fleetgate_backend::{build_router, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    let config = Config::from_env();
    info!(
        "Starting FleetGate (issuer: {}, audience: {}, token ttl: {}h)",
        config.jwt_issuer, config.jwt_audience, config.token_ttl_hours
    );

    let app = build_router(&config)?;

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("🎯 API server listening on {}", config.listen_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-filter support
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetgate_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
