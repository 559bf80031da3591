//! Error normalization — one user-facing message per failure.
//!
//! A [`Failure`] describes a caught failure by what is observable about it:
//! whether it is structured at all, whether a response arrived and with which
//! status, whether a request went out, a transport error code and free-form
//! text. [`normalize`] classifies it in a fixed order:
//!
//! 1. Unstructured → `unexpected error: {value}`
//! 2. Response with a status → per-status message
//! 3. Request sent, no response → connectivity message
//! 4. Timeout code → timeout message
//! 5. Message, else description, else `unknown`
//!
//! Typed client errors ([`HttpError`], [`SdkError`]) and JSON error values
//! both convert into a `Failure`, so every failure source shares the same
//! messages.

use crate::error::{HttpError, SdkError};
use serde_json::Value;

pub const AUTH_REQUIRED: &str = "auth required";
pub const ACCESS_DENIED: &str = "access denied";
pub const ENDPOINT_NOT_FOUND: &str = "endpoint not found";
pub const NO_RESPONSE: &str = "no response from server; check connection";
pub const TIMED_OUT: &str = "request timed out";
pub const UNKNOWN: &str = "unknown";

/// Transport codes that identify a timed-out request.
pub const TIMEOUT_CODES: &[&str] = &["ECONNABORTED", "ETIMEDOUT"];

/// A caught failure of arbitrary shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A bare value with no structure (a string, number, null...).
    Opaque(String),
    Structured(FailureDetails),
}

/// Observable facets of a structured failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureDetails {
    /// Status code of the response, when the response carried one.
    pub status: Option<u16>,
    /// Whether any response arrived.
    pub responded: bool,
    /// Whether the request left the client.
    pub request_sent: bool,
    /// Transport error code (e.g. `ECONNABORTED`).
    pub code: Option<String>,
    pub message: Option<String>,
    /// String rendering used when no message is present.
    pub description: Option<String>,
}

impl Failure {
    pub fn opaque(value: impl std::fmt::Display) -> Self {
        Failure::Opaque(value.to_string())
    }

    /// A response arrived with a non-success status.
    pub fn status(status: u16) -> Self {
        Failure::Structured(FailureDetails {
            status: Some(status),
            responded: true,
            request_sent: true,
            ..Default::default()
        })
    }

    /// The request went out and nothing came back.
    pub fn no_response() -> Self {
        Failure::Structured(FailureDetails {
            request_sent: true,
            ..Default::default()
        })
    }

    pub fn timeout() -> Self {
        Failure::Structured(FailureDetails {
            code: Some(TIMEOUT_CODES[0].to_string()),
            ..Default::default()
        })
    }

    pub fn message(message: impl Into<String>) -> Self {
        Failure::Structured(FailureDetails {
            message: Some(message.into()),
            ..Default::default()
        })
    }
}

/// Classify a failure into its user-facing message.
pub fn normalize(failure: &Failure) -> String {
    let details = match failure {
        Failure::Opaque(value) => return format!("unexpected error: {}", value),
        Failure::Structured(details) => details,
    };

    if let Some(status) = details.status {
        return status_message(status);
    }

    if details.request_sent && !details.responded {
        return NO_RESPONSE.to_string();
    }

    if details
        .code
        .as_deref()
        .is_some_and(|code| TIMEOUT_CODES.contains(&code))
    {
        return TIMED_OUT.to_string();
    }

    non_empty(details.message.as_deref())
        .or_else(|| non_empty(details.description.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Message for a response status. 500 and every unlisted status carry the code.
pub fn status_message(status: u16) -> String {
    match status {
        401 => AUTH_REQUIRED.to_string(),
        403 => ACCESS_DENIED.to_string(),
        404 => ENDPOINT_NOT_FOUND.to_string(),
        _ => format!("server error: {}", status),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

// ─── Conversions ─────────────────────────────────────────────────────────────

impl From<&HttpError> for Failure {
    fn from(e: &HttpError) -> Self {
        match e {
            HttpError::NetworkUnreachable(msg) => Failure::Structured(FailureDetails {
                request_sent: true,
                message: Some(msg.clone()),
                ..Default::default()
            }),
            // No request marker: a timeout is recognised by its code alone.
            HttpError::Timeout => Failure::timeout(),
            HttpError::AuthRequired
            | HttpError::Forbidden(_)
            | HttpError::NotFound(_)
            | HttpError::ServerError { .. }
            | HttpError::Rejected { .. } => Failure::Structured(FailureDetails {
                status: e.status(),
                responded: true,
                request_sent: true,
                description: Some(e.to_string()),
                ..Default::default()
            }),
            HttpError::MalformedResponse(msg) => Failure::Structured(FailureDetails {
                responded: true,
                request_sent: true,
                message: Some(format!("malformed response: {}", msg)),
                ..Default::default()
            }),
            HttpError::Unknown(msg) => Failure::Structured(FailureDetails {
                message: Some(msg.clone()),
                ..Default::default()
            }),
        }
    }
}

impl From<HttpError> for Failure {
    fn from(e: HttpError) -> Self {
        Failure::from(&e)
    }
}

impl From<&SdkError> for Failure {
    fn from(e: &SdkError) -> Self {
        match e {
            SdkError::Http(http) => Failure::from(http),
            SdkError::Serde(err) => Failure::from(&HttpError::MalformedResponse(err.to_string())),
            other => Failure::Structured(FailureDetails {
                message: Some(other.to_string()),
                ..Default::default()
            }),
        }
    }
}

impl From<SdkError> for Failure {
    fn from(e: SdkError) -> Self {
        Failure::from(&e)
    }
}

impl From<&str> for Failure {
    fn from(s: &str) -> Self {
        Failure::Opaque(s.to_string())
    }
}

impl From<String> for Failure {
    fn from(s: String) -> Self {
        Failure::Opaque(s)
    }
}

/// JSON-shaped failures: `{response: {status}, request, code, message, detail}`.
impl From<&Value> for Failure {
    fn from(value: &Value) -> Self {
        let obj = match value {
            Value::Object(obj) => obj,
            Value::String(s) => return Failure::Opaque(s.clone()),
            other => return Failure::Opaque(other.to_string()),
        };

        let present = |key: &str| obj.get(key).is_some_and(|v| !v.is_null());
        let text = |key: &str| match obj.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        let status = obj
            .get("response")
            .and_then(|r| r.get("status"))
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok());

        Failure::Structured(FailureDetails {
            status,
            responded: present("response"),
            request_sent: present("request"),
            code: obj.get("code").and_then(Value::as_str).map(str::to_string),
            message: obj.get("message").and_then(Value::as_str).map(str::to_string),
            description: text("detail"),
        })
    }
}

impl From<Value> for Failure {
    fn from(value: Value) -> Self {
        Failure::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_opaque_values_are_unexpected() {
        assert_eq!(normalize(&Failure::from("boom")), "unexpected error: boom");
        assert_eq!(normalize(&Failure::from(json!(42))), "unexpected error: 42");
        assert_eq!(normalize(&Failure::from(json!(null))), "unexpected error: null");
        assert_eq!(
            normalize(&Failure::from(json!("socket hang up"))),
            "unexpected error: socket hang up"
        );
    }

    #[test]
    fn test_known_status_codes() {
        assert_eq!(normalize(&Failure::status(401)), "auth required");
        assert_eq!(normalize(&Failure::status(403)), "access denied");
        assert_eq!(normalize(&Failure::status(404)), "endpoint not found");
        assert_eq!(normalize(&Failure::status(500)), "server error: 500");
    }

    #[test]
    fn test_other_status_codes_are_generic() {
        assert_eq!(normalize(&Failure::status(502)), "server error: 502");
        assert_eq!(normalize(&Failure::status(422)), "server error: 422");
    }

    #[test]
    fn test_status_wins_over_message_and_code() {
        let failure = Failure::from(json!({
            "response": {"status": 404},
            "request": {},
            "code": "ECONNABORTED",
            "message": "Request failed with status code 404"
        }));
        assert_eq!(normalize(&failure), "endpoint not found");
    }

    #[test]
    fn test_request_without_response() {
        assert_eq!(
            normalize(&Failure::no_response()),
            "no response from server; check connection"
        );
        let failure = Failure::from(json!({"request": {}, "message": "Network Error"}));
        assert_eq!(normalize(&failure), NO_RESPONSE);
    }

    #[test]
    fn test_no_response_branch_precedes_timeout_code() {
        let failure = Failure::from(json!({"request": {}, "code": "ECONNABORTED"}));
        assert_eq!(normalize(&failure), NO_RESPONSE);
    }

    #[test]
    fn test_timeout_code() {
        assert_eq!(normalize(&Failure::timeout()), "request timed out");
        let failure = Failure::from(json!({"code": "ETIMEDOUT", "message": "x"}));
        assert_eq!(normalize(&failure), TIMED_OUT);
    }

    #[test]
    fn test_fallback_prefers_message_then_description() {
        assert_eq!(normalize(&Failure::message("bad payload")), "bad payload");
        let failure = Failure::from(json!({"detail": "Strategy not found"}));
        assert_eq!(normalize(&failure), "Strategy not found");
        let failure = Failure::from(json!({"message": "", "detail": "fallback"}));
        assert_eq!(normalize(&failure), "fallback");
    }

    #[test]
    fn test_fallback_unknown() {
        assert_eq!(normalize(&Failure::from(json!({}))), "unknown");
        assert_eq!(normalize(&Failure::Structured(FailureDetails::default())), UNKNOWN);
    }

    #[test]
    fn test_response_without_status_falls_through() {
        let failure = Failure::from(json!({"response": {}, "request": {}, "message": "odd"}));
        assert_eq!(normalize(&failure), "odd");
    }

    #[test]
    fn test_http_error_conversions() {
        assert_eq!(HttpError::AuthRequired.user_message(), AUTH_REQUIRED);
        assert_eq!(HttpError::Forbidden(String::new()).user_message(), ACCESS_DENIED);
        assert_eq!(HttpError::NotFound(String::new()).user_message(), ENDPOINT_NOT_FOUND);
        assert_eq!(
            HttpError::ServerError { status: 500, body: "trace".into() }.user_message(),
            "server error: 500"
        );
        assert_eq!(
            HttpError::Rejected { status: 429, body: String::new() }.user_message(),
            "server error: 429"
        );
        assert_eq!(
            HttpError::NetworkUnreachable("connection refused".into()).user_message(),
            NO_RESPONSE
        );
        assert_eq!(HttpError::Timeout.user_message(), TIMED_OUT);
        assert_eq!(
            HttpError::MalformedResponse("missing field `data`".into()).user_message(),
            "malformed response: missing field `data`"
        );
        assert_eq!(HttpError::Unknown(String::new()).user_message(), UNKNOWN);
    }

    #[test]
    fn test_sdk_error_conversions() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let msg = SdkError::from(serde_err).user_message();
        assert!(msg.starts_with("malformed response: "), "{msg}");
        assert_eq!(
            SdkError::Config("missing base url".into()).user_message(),
            "Configuration error: missing base url"
        );
    }
}
