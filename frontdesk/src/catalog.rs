//! Room Catalog
//!
//! Static enumeration of physical rooms. The catalog is an explicitly
//! constructed value handed to the reconciler, never ambient state, so
//! tests can run against alternate layouts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Room numbers permanently flagged as under maintenance in the standard
/// catalog. Maintenance overrides any reservation state.
pub const STANDARD_MAINTENANCE_ROOMS: [u32; 3] = [103, 207, 305];

/// Room category, one per floor in the standard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Single,
    Double,
    Triple,
    Suite,
}

impl RoomType {
    /// Display name used in room grids and dropdowns.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Double => "Double",
            Self::Triple => "Triple",
            Self::Suite => "Suite",
        }
    }

    /// Lowercase filter key accepted from the outside ("single", "suite", ...).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Triple => "triple",
            Self::Suite => "suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = ();

    /// Parses the lowercase filter key. Unknown keys are simply unknown,
    /// callers translate that into an empty filter result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "triple" => Ok(Self::Triple),
            "suite" => Ok(Self::Suite),
            _ => Err(()),
        }
    }
}

/// Physical room entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub number: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub floor: u8,
}

/// The fixed set of rooms plus the maintenance override list.
///
/// Immutable for the process lifetime once constructed.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
    maintenance: BTreeSet<u32>,
}

impl RoomCatalog {
    /// Build a catalog from an arbitrary room list and maintenance set.
    /// Rooms are kept in ascending number order.
    pub fn new(mut rooms: Vec<Room>, maintenance: impl IntoIterator<Item = u32>) -> Self {
        rooms.sort_by_key(|r| r.number);
        Self {
            rooms,
            maintenance: maintenance.into_iter().collect(),
        }
    }

    /// The standard 40-room hotel layout: floors 1-4, ten rooms per floor,
    /// numbered `floor*100 + 1..=10`, one room type per floor.
    pub fn standard() -> Self {
        let floors = [
            (1u8, RoomType::Single),
            (2, RoomType::Double),
            (3, RoomType::Triple),
            (4, RoomType::Suite),
        ];
        let rooms = floors
            .iter()
            .flat_map(|&(floor, room_type)| {
                (1..=10u32).map(move |n| Room {
                    number: floor as u32 * 100 + n,
                    room_type,
                    floor,
                })
            })
            .collect();
        Self::new(rooms, STANDARD_MAINTENANCE_ROOMS)
    }

    /// Rooms in ascending number order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Look up a room by number.
    pub fn room(&self, number: u32) -> Option<&Room> {
        self.rooms
            .binary_search_by_key(&number, |r| r.number)
            .ok()
            .map(|i| &self.rooms[i])
    }

    pub fn is_under_maintenance(&self, number: u32) -> bool {
        self.maintenance.contains(&number)
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
