//! Command action handlers.
//!
//! Individual handler functions for each status command. Each handler receives
//! a [`CommandContext`](crate::commands::CommandContext), the output sink and
//! the argument tokens, and writes its result to the sink.
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Check the account is allowed to run the command
//! 2. Validate the arguments, printing the help page on usage errors
//! 3. Call the session or the API and write the outcome
//!
//! Failures are always reported as text, the returned error only comes from
//! the output sink.
//!
//! # Available Handlers
//!
//! - [`handle_status`] - Route to get or set
//! - [`handle_status_get`] - Print a status
//! - [`handle_status_set`] - Update the status
//! - [`handle_status_set_custom`] - Update the custom status

mod status;
mod status_get;
mod status_set;
mod status_set_custom;

pub use crate::commands::actions::{
    status::handle_status, status_get::handle_status_get, status_set::handle_status_set,
    status_set_custom::handle_status_set_custom,
};
