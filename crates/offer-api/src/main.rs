//! # Offers
//!
//! In-memory offer lifecycle service.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings
//! export HOST=0.0.0.0
//! export PORT=8080
//! export OFFERS_SEED_FILE=config/offers.toml
//! export LOG_FORMAT=json
//!
//! # Run the server
//! offers
//! ```

use offer_api::{routes, AppConfig, AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(filter);
    if config.json_logs {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    let addr = config.socket_addr()?;
    let is_prod = config.is_production();

    // Initialize application state
    let state = AppState::new(config).await?;

    info!("Environment: {}", state.config.environment);
    info!("Offers loaded: {}", state.offers.store().len().await);

    // Create router
    let app = routes::create_router(state);

    info!("Offers service v{} starting on http://{}", env!("CARGO_PKG_VERSION"), addr);

    if !is_prod {
        info!("Health: GET http://{}/health", addr);
        info!("Create: POST http://{}/offers/", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Offers service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
