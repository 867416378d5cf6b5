//! CampusConnect - Application Entry Point
//!
//! This is the main entry point for the CampusConnect validation gateway.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campusconnect::{
    config::{CONFIG, LogFormat},
    handlers,
    state::AppState,
    validation::ValidationSchemas,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);
    match CONFIG.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting CampusConnect validation gateway...");

    // Schemas are built once and shared read-only by every request
    let schemas = ValidationSchemas::new();
    tracing::info!(
        signup_fields = schemas.signup.fields().len(),
        login_fields = schemas.login.fields().len(),
        "Validation schemas loaded"
    );

    let state = AppState::new(schemas, CONFIG.clone());

    let app = handlers::app(state);

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
