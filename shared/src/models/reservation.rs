//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
///
/// Tokens are owned by the remote service and must round-trip unchanged
/// through create/update calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// The exact wire token for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::CheckedIn => "CHECKED_IN",
            Self::CheckedOut => "CHECKED_OUT",
            Self::Cancelled => "CANCELLED",
            Self::NoShow => "NO_SHOW",
        }
    }

    /// Whether the reservation has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled | Self::NoShow)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CHECKED_IN" => Ok(Self::CheckedIn),
            "CHECKED_OUT" => Ok(Self::CheckedOut),
            "CANCELLED" => Ok(Self::Cancelled),
            "NO_SHOW" => Ok(Self::NoShow),
            _ => Err(()),
        }
    }
}

/// Reservation entity, owned by the remote reservation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub reservation_id: i64,
    pub guest_name: String,
    pub room_number: u32,
    pub contact_number: String,
    pub status: ReservationStatus,
    /// When the booking was made; the service defaults this on create.
    pub reservation_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    /// Last status transition time; absent on never-updated records.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn is_checked_in(&self) -> bool {
        self.status == ReservationStatus::CheckedIn
    }
}

/// Create reservation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub guest_name: String,
    pub room_number: u32,
    pub contact_number: String,
    pub status: ReservationStatus,
}

/// Update reservation payload (full-record PUT)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub guest_name: String,
    pub room_number: u32,
    pub contact_number: String,
    pub status: ReservationStatus,
    pub reservation_date: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn status_tokens_round_trip() {
        let all = [
            (ReservationStatus::Pending, "PENDING"),
            (ReservationStatus::Confirmed, "CONFIRMED"),
            (ReservationStatus::CheckedIn, "CHECKED_IN"),
            (ReservationStatus::CheckedOut, "CHECKED_OUT"),
            (ReservationStatus::Cancelled, "CANCELLED"),
            (ReservationStatus::NoShow, "NO_SHOW"),
        ];
        for (status, token) in all {
            assert_eq!(status.as_str(), token);
            assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{token}\""));
            let parsed: ReservationStatus =
                serde_json::from_str(&format!("\"{token}\"")).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(token.parse::<ReservationStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_token_is_rejected() {
        assert!(serde_json::from_str::<ReservationStatus>("\"checked_in\"").is_err());
        assert!("Confirmed".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn reservation_uses_camel_case_fields() {
        let reservation = Reservation {
            reservation_id: 7,
            guest_name: "Alice Moreau".to_string(),
            room_number: 201,
            contact_number: "+34600111222".to_string(),
            status: ReservationStatus::CheckedIn,
            reservation_date: Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()),
            created_at: None,
            updated_at: None,
        };

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["reservationId"], 7);
        assert_eq!(json["guestName"], "Alice Moreau");
        assert_eq!(json["roomNumber"], 201);
        assert_eq!(json["status"], "CHECKED_IN");
        assert!(json["updatedAt"].is_null());
    }

    #[test]
    fn reservation_deserializes_without_optional_timestamps() {
        let json = r#"{
            "reservationId": 1,
            "guestName": "Bob",
            "roomNumber": 105,
            "contactNumber": "0600000000",
            "status": "CONFIRMED",
            "reservationDate": null,
            "createdAt": null,
            "updatedAt": null
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert!(reservation.updated_at.is_none());
    }
}
