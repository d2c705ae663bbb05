//! Response payload types that are not plain records or list envelopes.

use serde::Serialize;

/// Body of a successful `DELETE /api/tracks/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: String,
}

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the track store is reachable.
    pub db_healthy: bool,
}
