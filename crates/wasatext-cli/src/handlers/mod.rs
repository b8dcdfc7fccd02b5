//! Command handlers.
//!
//! Handlers are thin: they call the chat port or the route table held by
//! the `CliContext` and return the text to print. Backend calls made without
//! a session are still sent; the backend decides whether to reject them.

pub mod api;
pub mod conversations;
pub mod groups;
pub mod profile;
pub mod routes;
pub mod session;
pub mod shell;

#[cfg(test)]
pub(crate) mod testing;
