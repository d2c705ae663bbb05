use std::any::Any;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracklist_core::envelope::ErrorEnvelope;
use tracklist_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{status, message}` envelope
/// used by every non-2xx response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tracklist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A 404 that is not about a stored entity (e.g. an unknown route).
    #[error("Not found: {0}")]
    NotFound(String),

    /// A known path requested with an unsupported method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request outlived the configured timeout.
    #[error("Request timed out")]
    RequestTimeout,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// The full envelope for an error response, including its diagnostic trace.
///
/// Stored as a response extension; [`crate::middleware::attach_error_trace`]
/// swaps it in as the body when traces are enabled.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub ErrorEnvelope);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// Status code and client-facing message for this error.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
            ),
            AppError::RequestTimeout => {
                (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        let envelope = ErrorEnvelope::new(message);
        let detail = ErrorDetail(envelope.clone().with_trace(format!("{self:?}")));

        let mut response = (status, axum::Json(envelope)).into_response();
        response.extensions_mut().insert(detail);
        response
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Turn a caught handler panic into a 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}
