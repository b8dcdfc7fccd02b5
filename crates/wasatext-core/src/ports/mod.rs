//! Port definitions (trait abstractions) for external systems.
//!
//! Ports use only domain types; no HTTP client types appear in any
//! signature.

pub mod chat;

pub use chat::{ChatClientPort, ChatPortError, ChatPortResult};
