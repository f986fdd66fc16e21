//! Front-desk orchestration
//!
//! Pulls one reservation snapshot per refresh and derives every view from
//! it, so the room grid and the dashboard counters can never disagree
//! within a single refresh. All mutations go through the
//! [`ReservationSource`] seam.

use crate::catalog::RoomCatalog;
use crate::dashboard::{DashboardCounters, compute_counters};
use crate::error::{DeskError, DeskResult};
use crate::occupancy::{Reconciler, RoomStatistics, RoomStatus, RoomStatusView};
use crate::validate;
use chrono::NaiveDate;
use desk_client::ReservationSource;
use shared::{Reservation, ReservationCreate, ReservationStatus};
use std::sync::Arc;

/// Booking request from the reservation form.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub guest_name: String,
    pub room_number: u32,
    pub contact_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Walk-in guest checked in directly at the desk, no prior booking.
#[derive(Debug, Clone)]
pub struct WalkIn {
    pub guest_name: String,
    pub room_number: u32,
    pub contact_number: String,
}

/// Everything the UI renders after one refresh, derived from a single
/// reservation snapshot.
#[derive(Debug, Clone)]
pub struct DeskSnapshot {
    pub rooms: Vec<RoomStatusView>,
    pub room_stats: RoomStatistics,
    pub counters: DashboardCounters,
    pub reservations: Vec<Reservation>,
}

/// Front-desk service over a reservation source and a room catalog.
pub struct FrontDesk {
    source: Arc<dyn ReservationSource>,
    reconciler: Reconciler,
}

impl FrontDesk {
    pub fn new(source: Arc<dyn ReservationSource>, catalog: RoomCatalog) -> Self {
        Self {
            source,
            reconciler: Reconciler::new(catalog),
        }
    }

    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    fn snapshot_from(&self, reservations: Vec<Reservation>, reference: NaiveDate) -> DeskSnapshot {
        let rooms = self.reconciler.room_status(&reservations);
        let room_stats = RoomStatistics::summarize(&rooms);
        let counters = compute_counters(&reservations, reference);
        DeskSnapshot {
            rooms,
            room_stats,
            counters,
            reservations,
        }
    }

    /// Fetch the current snapshot and derive all views from it.
    pub async fn refresh(&self, reference: NaiveDate) -> DeskResult<DeskSnapshot> {
        let reservations = self.source.list().await?;
        tracing::debug!(count = reservations.len(), "Refreshed reservation snapshot");
        Ok(self.snapshot_from(reservations, reference))
    }

    /// Like [`refresh`](Self::refresh), but degrades to an empty snapshot
    /// when the reservation source is unavailable.
    pub async fn refresh_or_empty(&self, reference: NaiveDate) -> DeskSnapshot {
        match self.refresh(reference).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(error = %e, "Reservation source unavailable, rendering empty snapshot");
                self.snapshot_from(Vec::new(), reference)
            }
        }
    }

    /// Create a CONFIRMED booking after validating the form and confirming
    /// the room is currently bookable.
    pub async fn book(&self, booking: NewBooking, today: NaiveDate) -> DeskResult<Reservation> {
        validate::validate_guest_name(&booking.guest_name)?;
        validate::validate_contact_number(&booking.contact_number)?;
        validate::validate_room_number(booking.room_number)?;
        validate::validate_stay_dates(booking.check_in, booking.check_out, today)?;

        let reservations = self.source.list().await?;
        let bookable = self
            .reconciler
            .room_status(&reservations)
            .iter()
            .any(|v| v.room.number == booking.room_number && v.status == RoomStatus::Available);
        if !bookable {
            return Err(DeskError::RoomUnavailable(booking.room_number));
        }

        let created = self
            .source
            .create(&ReservationCreate {
                guest_name: booking.guest_name,
                room_number: booking.room_number,
                contact_number: booking.contact_number,
                status: ReservationStatus::Confirmed,
            })
            .await?;
        tracing::debug!(id = created.reservation_id, room = created.room_number, "Booking created");
        Ok(created)
    }

    /// Register a walk-in guest as CHECKED_IN immediately.
    pub async fn walk_in(&self, walk_in: WalkIn) -> DeskResult<Reservation> {
        validate::validate_guest_name(&walk_in.guest_name)?;
        validate::validate_contact_number(&walk_in.contact_number)?;
        validate::validate_room_number(walk_in.room_number)?;

        let created = self
            .source
            .create(&ReservationCreate {
                guest_name: walk_in.guest_name,
                room_number: walk_in.room_number,
                contact_number: walk_in.contact_number,
                status: ReservationStatus::CheckedIn,
            })
            .await?;
        Ok(created)
    }

    /// Check a confirmed guest in.
    pub async fn check_in(&self, id: i64) -> DeskResult<Reservation> {
        Ok(self
            .source
            .update_status(id, ReservationStatus::CheckedIn)
            .await?)
    }

    /// Check a guest out.
    pub async fn check_out(&self, id: i64) -> DeskResult<Reservation> {
        Ok(self
            .source
            .update_status(id, ReservationStatus::CheckedOut)
            .await?)
    }

    /// Cancel a reservation.
    pub async fn cancel(&self, id: i64) -> DeskResult<Reservation> {
        Ok(self
            .source
            .update_status(id, ReservationStatus::Cancelled)
            .await?)
    }

    /// Check out whoever is CHECKED_IN in the given room.
    pub async fn quick_check_out(&self, room: u32) -> DeskResult<Reservation> {
        let reservations = self.source.list().await?;
        let active = reservations
            .iter()
            .find(|r| r.room_number == room && r.is_checked_in())
            .ok_or(DeskError::NoActiveReservation(room))?;
        self.check_out(active.reservation_id).await
    }

    /// Permanently delete a reservation.
    pub async fn delete(&self, id: i64) -> DeskResult<()> {
        Ok(self.source.delete(id).await?)
    }
}
