use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::router::create_router;

pub async fn serve(config: HostConfig) -> Result<(), HostError> {
    trace!("Entering serve function");
    info!("Transactions dashboard host starting up");
    debug!("Configuration: {:?}", config);

    // Initialize application state
    trace!("Initializing application state");
    let state = match config.app_state() {
        Ok(state) => {
            debug!("Application state initialized successfully");
            state
        }
        Err(e) => {
            error!("Failed to initialize application state: {}", e);
            return Err(e);
        }
    };

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    let bind_address = config.bind_address;
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(source) => {
            error!("Failed to bind to address {}: {}", bind_address, source);
            return Err(HostError::Bind { address: bind_address, source });
        }
    };

    info!("Dashboard running on http://{}", bind_address);
    info!("Browser will call the API at {}", config.api_base_url);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(HostError::Serve(e));
    }

    info!("Server shutdown gracefully");
    Ok(())
}
