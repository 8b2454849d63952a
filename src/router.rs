use crate::handlers::{health::health_check, settings::get_runtime_settings};
use crate::schemas::AppState;
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Client-side routes like /statistics have no file behind them; they get index.html.
    let index = state.dist_dir.join("index.html");
    let bundle = ServeDir::new(&state.dist_dir).fallback(ServeFile::new(index));

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Settings the frontend loads before it starts
        .route("/runtime-settings.json", get(get_runtime_settings))
        // Compiled frontend
        .fallback_service(bundle)
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
