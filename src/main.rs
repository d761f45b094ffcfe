//! Guest check-in server
//!
//! Loads the seating plan, then serves the check-in front end plus:
//!   POST /api/register   — resolve a guest name to their table
//!   GET  /api/guests.csv — download everyone checked in so far

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guest_checkin::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guest_checkin=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Guest list: {}", config.guest_list_path.display());
    tracing::info!("Serving static files from: {}", config.static_dir.display());

    let state = AppState::from_config(&config).context("Failed to load guest list")?;

    let app = build_router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!("Port {} is already in use", config.port);
            }
            return Err(e).with_context(|| format!("Failed to bind to {}", addr));
        }
    };

    tracing::info!("Server running at http://localhost:{}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
