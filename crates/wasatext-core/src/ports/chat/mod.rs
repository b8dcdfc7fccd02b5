//! Chat backend port definitions.
//!
//! This module defines the port trait and error type for talking to the
//! WASAText backend. The actual implementation lives in `wasatext-client`.

mod client;
mod error;

pub use client::ChatClientPort;
pub use error::{ChatPortError, ChatPortResult};
