//! Occupancy reconciliation
//!
//! Joins the room catalog with a reservation snapshot to produce one
//! status view per room. Pure over its input; every call recomputes from
//! scratch, nothing is cached between refreshes.

use crate::catalog::{Room, RoomCatalog, RoomType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::Reservation;
use std::collections::HashMap;
use std::fmt;

/// Live status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-room view derived from catalog + reservation snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct RoomStatusView {
    #[serde(flatten)]
    pub room: Room,
    pub status: RoomStatus,
    pub guest_name: Option<String>,
    /// Check-in time of the occupying reservation (its last status
    /// transition), when known.
    pub check_in_time: Option<DateTime<Utc>>,
}

impl RoomStatusView {
    /// Guest column as rendered in grids; vacant rooms show `-`.
    pub fn guest_display(&self) -> &str {
        self.guest_name.as_deref().unwrap_or("-")
    }
}

/// Counts over a reconciled room list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomStatistics {
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub total: usize,
}

impl RoomStatistics {
    pub fn summarize(views: &[RoomStatusView]) -> Self {
        let mut stats = Self {
            available: 0,
            occupied: 0,
            maintenance: 0,
            total: views.len(),
        };
        for view in views {
            match view.status {
                RoomStatus::Available => stats.available += 1,
                RoomStatus::Occupied => stats.occupied += 1,
                RoomStatus::Maintenance => stats.maintenance += 1,
            }
        }
        stats
    }
}

/// Joins the catalog against reservation snapshots.
#[derive(Debug, Clone)]
pub struct Reconciler {
    catalog: RoomCatalog,
}

impl Reconciler {
    pub fn new(catalog: RoomCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// Derive one status view per catalog room, ascending by room number.
    ///
    /// Status priority: maintenance list > CHECKED_IN reservation > available.
    /// If the snapshot carries several CHECKED_IN reservations for one room
    /// (an upstream data anomaly), the first one in snapshot order wins; no
    /// conflict resolution is attempted.
    pub fn room_status(&self, reservations: &[Reservation]) -> Vec<RoomStatusView> {
        let mut occupants: HashMap<u32, &Reservation> = HashMap::new();
        for reservation in reservations.iter().filter(|r| r.is_checked_in()) {
            occupants.entry(reservation.room_number).or_insert(reservation);
        }

        self.catalog
            .rooms()
            .iter()
            .map(|room| {
                if self.catalog.is_under_maintenance(room.number) {
                    return RoomStatusView {
                        room: *room,
                        status: RoomStatus::Maintenance,
                        guest_name: None,
                        check_in_time: None,
                    };
                }
                match occupants.get(&room.number) {
                    Some(occupant) => RoomStatusView {
                        room: *room,
                        status: RoomStatus::Occupied,
                        guest_name: Some(occupant.guest_name.clone()),
                        check_in_time: occupant.updated_at,
                    },
                    None => RoomStatusView {
                        room: *room,
                        status: RoomStatus::Available,
                        guest_name: None,
                        check_in_time: None,
                    },
                }
            })
            .collect()
    }

    /// Rooms currently open for booking.
    pub fn available_rooms(&self, reservations: &[Reservation]) -> Vec<RoomStatusView> {
        self.room_status(reservations)
            .into_iter()
            .filter(|v| v.status == RoomStatus::Available)
            .collect()
    }

    /// Available rooms of one type.
    pub fn available_rooms_by_type(
        &self,
        reservations: &[Reservation],
        room_type: RoomType,
    ) -> Vec<RoomStatusView> {
        self.available_rooms(reservations)
            .into_iter()
            .filter(|v| v.room.room_type == room_type)
            .collect()
    }

    /// Available rooms filtered by a lowercase type key ("double", ...).
    /// Unknown keys yield an empty list rather than an error.
    pub fn available_rooms_by_key(
        &self,
        reservations: &[Reservation],
        key: &str,
    ) -> Vec<RoomStatusView> {
        match key.parse::<RoomType>() {
            Ok(room_type) => self.available_rooms_by_type(reservations, room_type),
            Err(()) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::ReservationStatus;

    fn reservation(id: i64, room: u32, status: ReservationStatus, guest: &str) -> Reservation {
        Reservation {
            reservation_id: id,
            guest_name: guest.to_string(),
            room_number: room,
            contact_number: "0600000000".to_string(),
            status,
            reservation_date: None,
            created_at: None,
            updated_at: Some(Utc.with_ymd_and_hms(2025, 6, 10, 14, 30, 0).unwrap()),
        }
    }

    fn standard_reconciler() -> Reconciler {
        Reconciler::new(RoomCatalog::standard())
    }

    #[test]
    fn always_emits_one_view_per_catalog_room_sorted() {
        let reconciler = standard_reconciler();
        let snapshots: [&[Reservation]; 2] = [
            &[],
            &[
                reservation(1, 201, ReservationStatus::CheckedIn, "Alice"),
                reservation(2, 305, ReservationStatus::CheckedIn, "Bob"),
                reservation(3, 9999, ReservationStatus::CheckedIn, "Ghost"),
            ],
        ];
        for snapshot in snapshots {
            let views = reconciler.room_status(snapshot);
            assert_eq!(views.len(), 40);
            let numbers: Vec<u32> = views.iter().map(|v| v.room.number).collect();
            let mut sorted = numbers.clone();
            sorted.sort_unstable();
            assert_eq!(numbers, sorted);
        }
    }

    #[test]
    fn maintenance_overrides_checked_in_reservations() {
        let reconciler = standard_reconciler();
        let snapshot = vec![reservation(1, 103, ReservationStatus::CheckedIn, "Alice")];
        let views = reconciler.room_status(&snapshot);

        for number in [103u32, 207, 305] {
            let view = views.iter().find(|v| v.room.number == number).unwrap();
            assert_eq!(view.status, RoomStatus::Maintenance, "room {number}");
            assert!(view.guest_name.is_none());
        }
    }

    #[test]
    fn checked_in_reservation_occupies_its_room() {
        let reconciler = standard_reconciler();
        let snapshot = vec![reservation(1, 201, ReservationStatus::CheckedIn, "Alice")];
        let views = reconciler.room_status(&snapshot);

        let view = views.iter().find(|v| v.room.number == 201).unwrap();
        assert_eq!(view.status, RoomStatus::Occupied);
        assert_eq!(view.guest_display(), "Alice");
        assert!(view.check_in_time.is_some());
    }

    #[test]
    fn non_checked_in_statuses_leave_rooms_available() {
        let reconciler = standard_reconciler();
        let snapshot = vec![
            reservation(1, 201, ReservationStatus::Confirmed, "Alice"),
            reservation(2, 202, ReservationStatus::CheckedOut, "Bob"),
            reservation(3, 204, ReservationStatus::Cancelled, "Carol"),
            reservation(4, 205, ReservationStatus::Pending, "Dave"),
            reservation(5, 206, ReservationStatus::NoShow, "Eve"),
        ];
        let views = reconciler.room_status(&snapshot);
        for number in [201u32, 202, 204, 205, 206] {
            let view = views.iter().find(|v| v.room.number == number).unwrap();
            assert_eq!(view.status, RoomStatus::Available, "room {number}");
        }
    }

    #[test]
    fn duplicate_checked_in_first_in_snapshot_order_wins() {
        let reconciler = standard_reconciler();
        let snapshot = vec![
            reservation(10, 101, ReservationStatus::CheckedIn, "First"),
            reservation(11, 101, ReservationStatus::CheckedIn, "Second"),
        ];
        let views = reconciler.room_status(&snapshot);

        let occupied: Vec<_> = views
            .iter()
            .filter(|v| v.room.number == 101 && v.status == RoomStatus::Occupied)
            .collect();
        assert_eq!(occupied.len(), 1);
        assert_eq!(occupied[0].guest_display(), "First");
    }

    #[test]
    fn empty_snapshot_leaves_everything_available_except_maintenance() {
        let reconciler = standard_reconciler();
        let views = reconciler.room_status(&[]);
        let stats = RoomStatistics::summarize(&views);
        assert_eq!(stats.total, 40);
        assert_eq!(stats.maintenance, 3);
        assert_eq!(stats.occupied, 0);
        assert_eq!(stats.available, 37);
    }

    #[test]
    fn room_status_is_idempotent() {
        let reconciler = standard_reconciler();
        let snapshot = vec![
            reservation(1, 201, ReservationStatus::CheckedIn, "Alice"),
            reservation(2, 401, ReservationStatus::CheckedIn, "Bob"),
        ];
        let first = reconciler.room_status(&snapshot);
        let second = reconciler.room_status(&snapshot);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn available_doubles_are_the_ten_floor_two_rooms_when_floor_is_clear() {
        let reconciler = standard_reconciler();
        // CHECKED_IN elsewhere must not affect floor 2. Room 207 is under
        // maintenance, so only nine doubles remain bookable.
        let snapshot = vec![reservation(1, 101, ReservationStatus::CheckedIn, "Alice")];
        let doubles = reconciler.available_rooms_by_key(&snapshot, "double");
        let numbers: Vec<u32> = doubles.iter().map(|v| v.room.number).collect();
        assert_eq!(numbers, vec![201, 202, 203, 204, 205, 206, 208, 209, 210]);

        // With an all-clear maintenance list the full floor comes back.
        let open = Reconciler::new(RoomCatalog::new(
            RoomCatalog::standard().rooms().to_vec(),
            [],
        ));
        let doubles = open.available_rooms_by_key(&[], "double");
        assert_eq!(doubles.len(), 10);
        assert!(doubles.iter().all(|v| v.room.floor == 2));
    }

    #[test]
    fn unknown_type_key_yields_empty_not_error() {
        let reconciler = standard_reconciler();
        assert!(reconciler.available_rooms_by_key(&[], "penthouse").is_empty());
        assert!(reconciler.available_rooms_by_key(&[], "Double").is_empty());
    }

    #[test]
    fn occupied_room_is_excluded_from_availability() {
        let reconciler = standard_reconciler();
        let snapshot = vec![reservation(1, 202, ReservationStatus::CheckedIn, "Alice")];
        let available = reconciler.available_rooms(&snapshot);
        assert!(available.iter().all(|v| v.room.number != 202));
        assert_eq!(available.len(), 36);
    }

    #[test]
    fn view_serializes_with_flattened_room_and_lowercase_status() {
        let reconciler = standard_reconciler();
        let snapshot = vec![reservation(1, 201, ReservationStatus::CheckedIn, "Alice")];
        let views = reconciler.room_status(&snapshot);
        let view = views.iter().find(|v| v.room.number == 201).unwrap();
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["number"], 201);
        assert_eq!(json["type"], "Double");
        assert_eq!(json["status"], "occupied");
    }
}
