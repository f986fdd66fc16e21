//! Front-desk core for the hotel reservation system
//!
//! Joins the static room catalog against live reservation snapshots to
//! produce per-room occupancy views and same-day dashboard counters, and
//! orchestrates front-desk operations (booking, check-in/out) through the
//! [`desk_client::ReservationSource`] seam.

pub mod catalog;
pub mod dashboard;
pub mod desk;
pub mod error;
pub mod occupancy;
pub mod validate;
pub mod view;

pub use catalog::{Room, RoomCatalog, RoomType};
pub use dashboard::{DashboardCounters, compute_counters};
pub use desk::{DeskSnapshot, FrontDesk, NewBooking, WalkIn};
pub use error::{DeskError, DeskResult};
pub use occupancy::{Reconciler, RoomStatistics, RoomStatus, RoomStatusView};
