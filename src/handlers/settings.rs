use axum::{extract::State, response::Json};
use common::ClientSettings;
use tracing::{debug, instrument};
use crate::schemas::AppState;

/// Runtime settings for the browser client, read once at startup.
#[instrument(skip(state))]
pub async fn get_runtime_settings(State(state): State<AppState>) -> Json<ClientSettings> {
    debug!("Serving runtime settings: {:?}", state.client_settings);
    Json(state.client_settings.as_ref().clone())
}
