//! Domain types shared by the tracklist server and client.
//!
//! Nothing in this crate performs I/O. The list query contract lives in
//! [`listing`] so the server and the client build and read the exact same
//! parameter set.

pub mod envelope;
pub mod error;
pub mod listing;
pub mod types;
pub mod validation;
