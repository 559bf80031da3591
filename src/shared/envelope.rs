//! The `{status, data | detail}` response envelope.
//!
//! Only some endpoints use it; others return bare objects or arrays, or a
//! single named key. Each endpoint's wire type says which shape it expects.

use crate::error::HttpError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "status": "success", "data": ... }` or `{ "status": "error", "detail": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    /// Error detail. A string for most errors, a list for request validation.
    pub detail: Option<Value>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        matches!(
            self.status.to_ascii_lowercase().as_str(),
            "success" | "ok" | "started" | "stopped"
        )
    }

    /// Human-readable detail, if the server sent one.
    pub fn detail_text(&self) -> Option<String> {
        match &self.detail {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => self.message.clone(),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Unwrap the payload.
    ///
    /// A server-reported error becomes `HttpError::Unknown(detail)` so the
    /// server's own wording reaches the user; a success without data is a
    /// malformed response.
    pub fn into_data(self) -> Result<T, HttpError> {
        if !self.is_success() {
            let detail = self
                .detail_text()
                .unwrap_or_else(|| format!("request failed with status `{}`", self.status));
            return Err(HttpError::Unknown(detail));
        }
        let status = self.status;
        self.data.ok_or_else(|| {
            HttpError::MalformedResponse(format!("`{}` envelope without data", status))
        })
    }
}
