//! Dashboard counters
//!
//! Same-day summary counters derived from a reservation snapshot. The
//! reference date is injected so "today" is an explicit calendar day (UTC),
//! never the ambient wall clock.

use chrono::NaiveDate;
use serde::Serialize;
use shared::{Reservation, ReservationStatus};
use std::collections::HashSet;

/// Front-page dashboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardCounters {
    /// CHECKED_IN reservations whose last transition happened on the
    /// reference day.
    pub checked_in_today: usize,
    /// CHECKED_OUT reservations whose last transition happened on the
    /// reference day.
    pub checked_out_today: usize,
    /// All CHECKED_IN reservations, regardless of date.
    pub total_in_hotel: usize,
    /// Unique room numbers among CHECKED_IN reservations; a multiply-booked
    /// room counts once.
    pub distinct_rooms_occupied: usize,
}

/// Compute dashboard counters for one snapshot against a reference day.
///
/// Reservations without `updated_at` are excluded from the "today"
/// counters but still count toward `total_in_hotel` when CHECKED_IN.
/// A CONFIRMED reservation due today contributes to no counter.
pub fn compute_counters(reservations: &[Reservation], reference: NaiveDate) -> DashboardCounters {
    let mut counters = DashboardCounters::default();
    let mut occupied_rooms: HashSet<u32> = HashSet::new();

    for reservation in reservations {
        let updated_on = reservation.updated_at.map(|t| t.date_naive());
        match reservation.status {
            ReservationStatus::CheckedIn => {
                counters.total_in_hotel += 1;
                occupied_rooms.insert(reservation.room_number);
                if updated_on == Some(reference) {
                    counters.checked_in_today += 1;
                }
            }
            ReservationStatus::CheckedOut => {
                if updated_on == Some(reference) {
                    counters.checked_out_today += 1;
                }
            }
            _ => {}
        }
    }

    counters.distinct_rooms_occupied = occupied_rooms.len();
    counters
}
