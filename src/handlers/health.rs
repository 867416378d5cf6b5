//! Health check handlers

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Schemas loaded at startup, in route order
    pub schemas: Vec<&'static str>,
}

/// Report liveness and which request schemas are being enforced
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let schemas = state.schemas();

    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        schemas: vec![schemas.signup.name(), schemas.login.name()],
    })
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
