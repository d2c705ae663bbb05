use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::{AppError, ErrorDetail};
use crate::state::AppState;

/// Finish error responses: envelope bare timeouts and, when traces are
/// enabled, replace the body with the traced envelope.
///
/// Responses without an [`ErrorDetail`] extension pass through untouched,
/// except the body-less 408 produced by the timeout layer.
pub async fn attach_error_trace(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    if response.status() == StatusCode::REQUEST_TIMEOUT
        && response.extensions().get::<ErrorDetail>().is_none()
    {
        tracing::warn!("Request timed out");
        response = AppError::RequestTimeout.into_response();
    }

    let Some(ErrorDetail(envelope)) = response.extensions_mut().remove::<ErrorDetail>() else {
        return response;
    };
    if !state.config.expose_error_trace() {
        return response;
    }

    let status = response.status();
    (status, Json(envelope)).into_response()
}
