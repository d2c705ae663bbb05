//! Error envelope returned by every non-2xx response.

use serde::{Deserialize, Serialize};

/// Value of the `status` field in every error envelope.
pub const ERROR_STATUS: &str = "error";

/// `{ "status": "error", "message": "...", "trace": "..." }`.
///
/// `trace` is only populated outside production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_string(),
            message: message.into(),
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}
