use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

/// Path the browser shell should send the operator to when the session is gone.
pub const REAUTH_PATH: &str = "/panel/auth/telegram";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {detail}")]
    Upstream { status: u16, detail: String },

    /// The backend answered 2xx but the body was absent or did not match the expected shape.
    #[error("Malformed backend response: {0}")]
    MalformedBody(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Builds the error for a non-success backend response. FastAPI puts the
    /// reason under `detail`; anything else is kept verbatim.
    pub fn from_upstream(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").map(|d| match d.as_str() {
                Some(s) => s.to_string(),
                None => d.to_string(),
            }))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 => Error::Unauthorized(detail),
            403 => Error::Forbidden(detail),
            404 => Error::NotFound(detail),
            _ => Error::Upstream { status, detail },
        }
    }

    /// True for the three failure kinds that come from talking to the backend.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            Error::Reqwest(_) | Error::Upstream { .. } | Error::MalformedBody(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        if let Error::Unauthorized(msg) = &self {
            let body = Json(json!({ "error": msg, "reauth": REAUTH_PATH }));
            return (StatusCode::UNAUTHORIZED, body).into_response();
        }

        let (status, error_message) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Error::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Json(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Error::Upstream { status, detail } => (
                StatusCode::BAD_GATEWAY,
                format!("Backend error ({}): {}", status, detail),
            ),
            Error::MalformedBody(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Malformed backend response: {}", msg),
            ),
            Error::Reqwest(err) => (
                StatusCode::BAD_GATEWAY,
                format!("Backend unreachable: {}", err),
            ),
            Error::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Error::Io(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            Error::Anyhow(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
