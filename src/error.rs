//! Unified client error types.

use crate::failure::{self, Failure};
use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Poller stopped")]
    PollerStopped,

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The normalized, user-facing message for this error.
    pub fn user_message(&self) -> String {
        failure::normalize(&Failure::from(self))
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    /// The request could not reach the server (DNS, refused connection, reset).
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Authentication required")]
    AuthRequired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    /// Any other non-success status (400, 409, 422, 429, ...).
    #[error("Rejected {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Unknown(String),
}

impl HttpError {
    /// Map a non-success status code and its body to the taxonomy.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => HttpError::AuthRequired,
            403 => HttpError::Forbidden(body),
            404 => HttpError::NotFound(body),
            500..=599 => HttpError::ServerError { status, body },
            _ => HttpError::Rejected { status, body },
        }
    }

    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::AuthRequired => Some(401),
            HttpError::Forbidden(_) => Some(403),
            HttpError::NotFound(_) => Some(404),
            HttpError::ServerError { status, .. } | HttpError::Rejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// The normalized, user-facing message for this error.
    pub fn user_message(&self) -> String {
        failure::normalize(&Failure::from(self))
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return HttpError::Timeout;
        }
        if e.is_decode() {
            return HttpError::MalformedResponse(e.to_string());
        }
        if let Some(status) = e.status() {
            return HttpError::from_status(status.as_u16(), e.to_string());
        }
        if e.is_connect() || e.is_request() {
            return HttpError::NetworkUnreachable(e.to_string());
        }
        HttpError::Unknown(e.to_string())
    }
}
