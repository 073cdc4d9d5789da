use thiserror::Error;

/// Failure of a call to the REST API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<serde_qs::Error> for ApiError {
    fn from(e: serde_qs::Error) -> Self {
        ApiError::Serialize(e.to_string())
    }
}
