//! Shared types for the front-desk workspace
//!
//! Wire-level models for the remote reservation API, used by both the
//! HTTP client and the reconciliation core.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
