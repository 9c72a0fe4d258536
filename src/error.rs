use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request to SoundCloud failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("SoundCloud returned {status} for {url}")]
    StatusError { url: String, status: StatusCode },

    #[error("User '{0}' could not be resolved")]
    NotFound(String),

    #[error("Could not find a client_id on the SoundCloud website")]
    CredentialNotFound,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to decode response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Response is missing required field: {0}")]
    MissingField(&'static str),
}

impl ApiError {
    /// True for transport failures and non-success HTTP statuses.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::RequestError(_) | ApiError::StatusError { .. })
    }

    pub fn is_credential(&self) -> bool {
        matches!(self, ApiError::CredentialNotFound)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::StatusError { status, .. } => Some(*status),
            ApiError::RequestError(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
