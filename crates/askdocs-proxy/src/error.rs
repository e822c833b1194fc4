//! Error types for the proxy service.
//!
//! [`ProxyError`] unifies all failure modes and implements
//! [`axum::response::IntoResponse`] so handlers can return
//! `Result<…, ProxyError>` directly.  Every failure is converted into a
//! JSON error payload with an appropriate status code — nothing is ever
//! thrown past the handler boundary, and nothing is retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use askdocs_models::ModelError;

/// Errors that can occur while handling a chat exchange.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The request carried no usable message.
    #[error("invalid request: {0}")]
    Validation(#[from] ModelError),

    /// The retrieval service answered with a non-success status.
    /// The status is mirrored back to the caller.
    #[error("retrieval service returned status {status}")]
    UpstreamStatus {
        /// HTTP status code the upstream returned.
        status: u16,
    },

    /// The retrieval service could not be reached at the transport level.
    #[error("failed to reach retrieval service: {0}")]
    UpstreamTransport(#[from] reqwest::Error),

    /// Any other failure during parsing or forwarding.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// Status code reported to the caller.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::UpstreamTransport(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed error payload text for the caller.  Callers get a generic
    /// message per failure class, never the underlying error detail.
    fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Message required",
            Self::UpstreamStatus { .. } | Self::UpstreamTransport(_) => {
                "Error from FastAPI server"
            }
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(%status, error = %self, "request failed");
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
