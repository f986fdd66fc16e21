//! Front-desk presentation helpers
//!
//! Pure formatting and projection used by the table/grid renderers:
//! status labels, checkout dates, humanized "last updated" strings and
//! the per-status action sets. `now` is always injected.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use shared::{Reservation, ReservationStatus};

/// Human-readable status label for tables.
pub fn status_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::CheckedIn => "Checked In",
        ReservationStatus::CheckedOut => "Checked Out",
        ReservationStatus::Confirmed => "Confirmed",
        ReservationStatus::Pending => "Pending",
        ReservationStatus::Cancelled => "Cancelled",
        ReservationStatus::NoShow => "No Show",
    }
}

/// Kebab-case style key for status badges.
pub fn status_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::CheckedIn => "checked-in",
        ReservationStatus::CheckedOut => "checked-out",
        ReservationStatus::Confirmed => "confirmed",
        ReservationStatus::Pending => "pending",
        ReservationStatus::Cancelled => "cancelled",
        ReservationStatus::NoShow => "no-show",
    }
}

/// Checkout date column: only meaningful once the guest has checked out.
pub fn checkout_date(reservation: &Reservation) -> Option<NaiveDate> {
    if reservation.status == ReservationStatus::CheckedOut {
        reservation.updated_at.map(|t| t.date_naive())
    } else {
        None
    }
}

/// Humanized "last updated" column.
///
/// Under a minute reads "Just now", then minutes, then hours, then the
/// plain date past 24h. Records that were never updated read "Unknown".
pub fn last_updated(reservation: &Reservation, now: DateTime<Utc>) -> String {
    let Some(updated) = reservation.updated_at else {
        return "Unknown".to_string();
    };
    let minutes = (now - updated).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        updated.date_naive().format("%Y-%m-%d").to_string()
    }
}

/// Operations the front desk can take on a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeskAction {
    CheckIn,
    CheckOut,
    Cancel,
    Edit,
    Delete,
}

/// Actions offered for a reservation in the given status.
pub fn actions_for(status: ReservationStatus) -> &'static [DeskAction] {
    match status {
        ReservationStatus::Confirmed => &[DeskAction::CheckIn, DeskAction::Cancel],
        ReservationStatus::CheckedIn => &[DeskAction::CheckOut, DeskAction::Edit],
        ReservationStatus::CheckedOut
        | ReservationStatus::Cancelled
        | ReservationStatus::NoShow => &[DeskAction::Delete],
        ReservationStatus::Pending => &[DeskAction::Edit, DeskAction::Delete],
    }
}

/// Guests currently in the hotel, i.e. CHECKED_IN reservations.
pub fn current_guests(reservations: &[Reservation]) -> Vec<&Reservation> {
    reservations.iter().filter(|r| r.is_checked_in()).collect()
}
