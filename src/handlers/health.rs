use axum::{http::StatusCode, response::Json};
use tracing::instrument;
use crate::schemas::HealthResponse;

/// Health check endpoint
#[instrument]
pub async fn health_check() -> Result<Json<HealthResponse>, StatusCode> {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(Json(response))
}
