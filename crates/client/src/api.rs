//! HTTP client for the `/tracks` endpoints.

use serde::de::DeserializeOwned;
use tracklist_core::envelope::ErrorEnvelope;
use tracklist_core::listing::{ListQuery, Page};

use crate::models::{DeleteResponse, Track, TrackInput};

/// HTTP client for one tracks API.
#[derive(Debug, Clone)]
pub struct TracksClient {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the tracks API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Api {
        status: u16,
        /// The envelope message, or the raw body when it is not an envelope.
        message: String,
    },
}

impl ClientError {
    /// HTTP status for server-reported errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Request(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

impl TracksClient {
    /// * `base_url` - API root, e.g. `http://localhost:3001/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn tracks_url(&self) -> String {
        format!("{}/tracks", self.base_url)
    }

    fn track_url(&self, id: &str) -> String {
        format!("{}/tracks/{}", self.base_url, id)
    }

    /// `GET /tracks` with the query's flat parameters.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Track>, ClientError> {
        let response = self
            .client
            .get(self.tracks_url())
            .query(&query.to_query_params())
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn get(&self, id: &str) -> Result<Track, ClientError> {
        let response = self.client.get(self.track_url(id)).send().await?;
        Self::parse_response(response).await
    }

    pub async fn create(&self, input: &TrackInput) -> Result<Track, ClientError> {
        let response = self
            .client
            .post(self.tracks_url())
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn update(&self, id: &str, input: &TrackInput) -> Result<Track, ClientError> {
        let response = self
            .client
            .put(self.track_url(id))
            .json(input)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<DeleteResponse, ClientError> {
        let response = self.client.delete(self.track_url(id)).send().await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a
    /// [`ClientError::Api`] carrying the envelope message on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => envelope.message,
            Err(_) if body.is_empty() => status.to_string(),
            Err(_) => body,
        };
        tracing::debug!(status = status.as_u16(), %message, "Tracks API error");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
