//! Messagely - Messaging Web Service
//!
//! Initializes configuration, logging, and storage, then serves the
//! register/login and message routes over HTTP.

use anyhow::{Context, Result};
use dotenv::dotenv;
use messagely_backend::{config::Config, routes, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    init_tracing();

    info!("🚀 Messagely backend starting");

    let config = Config::from_env();
    let state = AppState::new(&config)?;

    info!("🔐 Authentication initialized (work factor {})", config.bcrypt_work_factor);

    let app = routes::app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with env-driven filtering
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "messagely_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
