use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Unauthorized - session is missing or expired")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Shared by every request that was waiting on the failed renewal
    #[error("Token renewal failed: {0}")]
    RenewalFailed(#[source] Arc<ApiError>),

    #[error("Credential storage error: {0}")]
    CredentialStore(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    /// Pull the human readable message out of an error body.
    ///
    /// The backend reports `detail` either as a string or, for request
    /// validation errors, as a list of `{loc, msg}` objects.
    fn extract_detail(body: &str) -> String {
        let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
            return Self::truncate_body(body);
        };

        match parsed.detail {
            serde_json::Value::String(s) => Self::truncate_body(&s),
            serde_json::Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| {
                        let msg = item.get("msg")?.as_str()?;
                        let field = item
                            .get("loc")
                            .and_then(|loc| loc.as_array())
                            .and_then(|loc| loc.last())
                            .and_then(|f| f.as_str());
                        Some(match field {
                            Some(f) => format!("{}: {}", f, msg),
                            None => msg.to_string(),
                        })
                    })
                    .collect();
                if messages.is_empty() {
                    Self::truncate_body(body)
                } else {
                    Self::truncate_body(&messages.join("; "))
                }
            }
            other => Self::truncate_body(&other.to_string()),
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = Self::extract_detail(body);
        match status.as_u16() {
            400 => ApiError::BadRequest(detail),
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(detail),
            404 => ApiError::NotFound(detail),
            422 => ApiError::Validation(detail),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(detail),
            _ => ApiError::InvalidResponse(format!("Status {}: {}", status, detail)),
        }
    }

    /// True for failures that end the session: a bare 401 or a failed renewal.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::RenewalFailed(_))
    }

    /// Short message suitable for a toast or status line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized | ApiError::RenewalFailed(_) => {
                "Session expired. Please log in again.".to_string()
            }
            ApiError::RateLimited => "Server is busy. Please wait a moment and try again.".to_string(),
            ApiError::NetworkError(e) if e.is_timeout() => {
                "Connection timed out. Please try again.".to_string()
            }
            ApiError::NetworkError(_) => "Network error. Check your connection.".to_string(),
            ApiError::ServerError(_) => "Something went wrong on the server.".to_string(),
            ApiError::BadRequest(msg)
            | ApiError::Validation(msg)
            | ApiError::AccessDenied(msg)
            | ApiError::NotFound(msg)
            | ApiError::InvalidInput(msg) => msg.clone(),
            other => format!("Error: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_extracts_string_detail() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"detail":"Email already registered"}"#);
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == "Email already registered"));
    }

    #[test]
    fn test_from_status_extracts_validation_list() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"}]}"#;
        let err = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body);
        match err {
            ApiError::Validation(msg) => assert_eq!(msg, "email: value is not a valid email address"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_status_maps_codes() {
        assert!(matches!(ApiError::from_status(StatusCode::UNAUTHORIZED, ""), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(StatusCode::FORBIDDEN, "no"), ApiError::AccessDenied(_)));
        assert!(matches!(ApiError::from_status(StatusCode::NOT_FOUND, "{}"), ApiError::NotFound(_)));
        assert!(matches!(ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ""), ApiError::RateLimited));
        assert!(matches!(ApiError::from_status(StatusCode::BAD_GATEWAY, "oops"), ApiError::ServerError(_)));
        assert!(matches!(ApiError::from_status(StatusCode::IM_A_TEAPOT, ""), ApiError::InvalidResponse(_)));
    }

    #[test]
    fn test_truncate_long_body() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 20);
        let truncated = ApiError::truncate_body(&body);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.contains("truncated, 520 total bytes"));
    }

    #[test]
    fn test_auth_failure_classification() {
        assert!(ApiError::Unauthorized.is_auth_failure());
        assert!(ApiError::RenewalFailed(Arc::new(ApiError::Unauthorized)).is_auth_failure());
        assert!(!ApiError::RateLimited.is_auth_failure());
        assert_eq!(
            ApiError::RenewalFailed(Arc::new(ApiError::Unauthorized)).user_message(),
            "Session expired. Please log in again."
        );
    }
}
