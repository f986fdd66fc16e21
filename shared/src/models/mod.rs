//! Data models
//!
//! Shared between the API client and the front-desk core. Field names
//! follow the remote service's JSON (camelCase); status tokens are
//! exact SCREAMING_SNAKE strings and must round-trip unchanged.

pub mod reservation;

// Re-exports
pub use reservation::*;
