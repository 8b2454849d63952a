#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use common::ClientSettings;
    use std::path::PathBuf;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Built bundle checked in for tests: index.html and app.js.
    pub const FIXTURE_DIST: &str = "fixtures/dist";

    pub fn test_client_settings() -> ClientSettings {
        ClientSettings {
            api_base_url: "http://api.test/api".to_string(),
            page_size: 7,
            ..Default::default()
        }
    }

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        AppState::new(test_client_settings(), PathBuf::from(FIXTURE_DIST))
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state())
    }
}
