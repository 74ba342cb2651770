//! Error handling for the backend module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Failed to decode a JSON body returned by the backend
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl BackendError {
    pub async fn from_response(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        BackendError::Http { status, message }
    }

    /// HTTP status code, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Http { status, .. } => Some(*status),
            BackendError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            BackendError::Decode(_) => None,
        }
    }
}
