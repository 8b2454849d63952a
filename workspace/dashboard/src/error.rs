use common::Endpoint;
use thiserror::Error;

/// Error types for a single collaborator request.
///
/// The coordinator does not distinguish between them: any of these rejects
/// the whole refresh cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Request to {endpoint} failed: {message}")]
    Network { endpoint: Endpoint, message: String },

    /// The API answered with a non-success status
    #[error("Request to {endpoint} returned HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// The response body did not match the expected payload
    #[error("Response from {endpoint} could not be decoded: {message}")]
    Decode { endpoint: Endpoint, message: String },
}

impl FetchError {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => *endpoint,
        }
    }
}

/// Type alias for Result with FetchError
pub type Result<T> = std::result::Result<T, FetchError>;
