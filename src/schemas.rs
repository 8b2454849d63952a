use common::ClientSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Settings handed to the browser at startup
    pub client_settings: Arc<ClientSettings>,
    /// Directory with the built frontend
    pub dist_dir: PathBuf,
}

impl AppState {
    pub fn new(client_settings: ClientSettings, dist_dir: PathBuf) -> Self {
        Self {
            client_settings: Arc::new(client_settings),
            dist_dir,
        }
    }
}

/// Health check response
#[derive(Serialize, Deserialize, Debug)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
}
