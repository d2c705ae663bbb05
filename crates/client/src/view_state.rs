//! The track list view as an immutable state and a pure update function.
//!
//! Every user action or fetch result is a [`Msg`]. [`update`] returns the
//! next [`ViewState`] together with the [`Command`] the caller must run.
//! Fetches carry a ticket; only the result for the latest ticket is applied.

use tracklist_core::listing::{ListQuery, Page, Pagination, SortSpec, TrackFilter};

use crate::models::Track;

/// Sequence number identifying one issued fetch.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// What the next fetch will ask for.
    pub query: ListQuery,
    /// The last successfully loaded page.
    pub tracks: Vec<Track>,
    pub pagination: Option<Pagination>,
    pub loading: bool,
    /// Dismissible message from the last failed fetch.
    pub error: Option<String>,
    /// Ticket of the most recently issued fetch.
    pub latest_ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Replace all three filters. Blank terms clear the filter.
    ApplyFilters {
        title: Option<String>,
        artist: Option<String>,
        album: Option<String>,
    },
    ApplySort(SortSpec),
    /// Go to a page. The number is stored as given.
    SetPage(u32),
    Refresh,
    PageLoaded { ticket: Ticket, page: Page<Track> },
    LoadFailed { ticket: Ticket, message: String },
    /// A create, update or delete was rejected. The list is left as is.
    MutationFailed { message: String },
    DismissError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Fetch { ticket: Ticket, query: ListQuery },
}

/// Compute the next state for `msg`.
pub fn update(state: &ViewState, msg: Msg) -> (ViewState, Command) {
    let mut next = state.clone();

    match msg {
        Msg::ApplyFilters {
            title,
            artist,
            album,
        } => {
            next.query.filter = TrackFilter::from_input(title, artist, album);
            next.query.page = 1;
            fetch(next)
        }
        Msg::ApplySort(sort) => {
            next.query.sort = sort;
            next.query.page = 1;
            fetch(next)
        }
        Msg::SetPage(page) => {
            next.query.page = page;
            fetch(next)
        }
        Msg::Refresh => fetch(next),
        Msg::PageLoaded { ticket, page } => {
            if ticket != state.latest_ticket {
                return (next, Command::None);
            }
            page_loaded(next, page)
        }
        Msg::LoadFailed { ticket, message } => {
            if ticket != state.latest_ticket {
                return (next, Command::None);
            }
            next.loading = false;
            next.error = Some(message);
            (next, Command::None)
        }
        Msg::MutationFailed { message } => {
            next.error = Some(message);
            (next, Command::None)
        }
        Msg::DismissError => {
            next.error = None;
            (next, Command::None)
        }
    }
}

fn fetch(mut next: ViewState) -> (ViewState, Command) {
    next.latest_ticket += 1;
    next.loading = true;
    let command = Command::Fetch {
        ticket: next.latest_ticket,
        query: next.query.clone(),
    };
    (next, command)
}

fn page_loaded(mut next: ViewState, page: Page<Track>) -> (ViewState, Command) {
    let pagination = page.pagination;
    next.loading = false;
    next.error = None;
    next.pagination = Some(pagination);
    next.query.page = pagination.current_page;

    if pagination.total_pages == 0 {
        next.tracks = Vec::new();
        next.query.page = 1;
        return (next, Command::None);
    }

    if u64::from(pagination.current_page) > pagination.total_pages {
        // Past the end: jump to the last page, keeping the current rows on
        // screen until it arrives.
        next.query.page = u32::try_from(pagination.total_pages).unwrap_or(u32::MAX);
        return fetch(next);
    }

    next.tracks = page.data;
    (next, Command::None)
}
