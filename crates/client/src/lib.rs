//! Client for the tracks API.
//!
//! [`api::TracksClient`] speaks HTTP; [`view_state`] holds the list view as
//! an immutable state plus a pure update function; [`controller`] wires the
//! two together.

pub mod api;
pub mod controller;
pub mod models;
pub mod view_state;

pub use api::{ClientError, TracksClient};
pub use controller::TrackListController;
pub use view_state::{update, Command, Msg, ViewState};
