use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the host from starting or serving.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("frontend bundle not found: {} has no index.html", .0.display())]
    MissingBundle(PathBuf),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
