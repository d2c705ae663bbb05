//! Request/response middleware.
//!
//! - [`error_trace::attach_error_trace`] -- adds diagnostic traces to error
//!   envelopes outside production.

pub mod error_trace;

pub use error_trace::attach_error_trace;
