//! Shared CLI presentation utilities.
//!
//! Format-only helpers: every `render_*` function returns the text a handler
//! prints, so output can be checked without a terminal.

pub mod chat_display;
pub mod tables;

pub use chat_display::{render_conversations, render_messages, render_routes, render_users};
pub use tables::{format_timestamp, separator, truncate_string};
