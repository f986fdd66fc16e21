//! Front-desk error types

use desk_client::ClientError;
use thiserror::Error;

/// Error type for front-desk operations
#[derive(Debug, Error)]
pub enum DeskError {
    /// Reservation service call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Input rejected before reaching the service
    #[error("Validation error: {0}")]
    Validation(String),

    /// Target room cannot take a booking right now
    #[error("Room {0} is not available for booking")]
    RoomUnavailable(u32),

    /// No CHECKED_IN reservation exists for the room
    #[error("No active reservation found for room {0}")]
    NoActiveReservation(u32),
}

/// Result type for front-desk operations
pub type DeskResult<T> = Result<T, DeskError>;
