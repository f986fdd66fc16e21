//! Desk Client - HTTP client for the remote reservation service
//!
//! Provides typed network calls against the `/api/hotel` REST surface and
//! the [`ReservationSource`] seam the front-desk core consumes, with an
//! in-memory implementation for tests and offline use.

pub mod config;
pub mod error;
pub mod http;
pub mod source;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use source::{InMemoryReservations, ReservationSource};

// Re-export shared types for convenience
pub use shared::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
