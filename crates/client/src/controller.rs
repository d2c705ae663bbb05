//! Drives a [`ViewState`] against a live [`TracksClient`].

use crate::api::{ClientError, TracksClient};
use crate::models::{DeleteResponse, Track, TrackInput};
use crate::view_state::{update, Command, Msg, ViewState};
use tracklist_core::listing::SortSpec;

/// Owns the list view and runs the commands its updates produce.
///
/// Each call returns once no fetch is outstanding. Mutations refresh the
/// list afterwards so the visible page reflects them.
pub struct TrackListController {
    client: TracksClient,
    state: ViewState,
}

impl TrackListController {
    pub fn new(client: TracksClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn client(&self) -> &TracksClient {
        &self.client
    }

    /// Apply `msg`, then run fetches until the state settles.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut command = self.apply(msg);

        while let Command::Fetch { ticket, query } = command {
            let msg = match self.client.list(&query).await {
                Ok(page) => Msg::PageLoaded { ticket, page },
                Err(err) => {
                    tracing::warn!(error = %err, page = query.page, "Failed to load tracks");
                    Msg::LoadFailed {
                        ticket,
                        message: error_message(&err),
                    }
                }
            };
            command = self.apply(msg);
        }
    }

    fn apply(&mut self, msg: Msg) -> Command {
        let (next, command) = update(&self.state, msg);
        self.state = next;
        command
    }

    pub async fn load(&mut self) {
        self.dispatch(Msg::Refresh).await;
    }

    pub async fn apply_filters(
        &mut self,
        title: Option<String>,
        artist: Option<String>,
        album: Option<String>,
    ) {
        self.dispatch(Msg::ApplyFilters {
            title,
            artist,
            album,
        })
        .await;
    }

    pub async fn apply_sort(&mut self, sort: SortSpec) {
        self.dispatch(Msg::ApplySort(sort)).await;
    }

    pub async fn set_page(&mut self, page: u32) {
        self.dispatch(Msg::SetPage(page)).await;
    }

    pub async fn dismiss_error(&mut self) {
        self.dispatch(Msg::DismissError).await;
    }

    pub async fn create(&mut self, input: &TrackInput) -> Result<Track, ClientError> {
        let result = self.client.create(input).await;
        self.finish_mutation(result).await
    }

    pub async fn update(&mut self, id: &str, input: &TrackInput) -> Result<Track, ClientError> {
        let result = self.client.update(id, input).await;
        self.finish_mutation(result).await
    }

    pub async fn delete(&mut self, id: &str) -> Result<DeleteResponse, ClientError> {
        let result = self.client.delete(id).await;
        self.finish_mutation(result).await
    }

    /// Refresh after a successful mutation; surface a failed one as the
    /// view's error message.
    async fn finish_mutation<T>(
        &mut self,
        result: Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        match result {
            Ok(value) => {
                self.load().await;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Track mutation failed");
                self.dispatch(Msg::MutationFailed {
                    message: error_message(&err),
                })
                .await;
                Err(err)
            }
        }
    }
}

/// Server messages are shown as-is; transport failures keep their detail.
fn error_message(err: &ClientError) -> String {
    match err {
        ClientError::Api { message, .. } => message.clone(),
        ClientError::Request(_) => err.to_string(),
    }
}
