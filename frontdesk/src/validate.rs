//! Input validation helpers
//!
//! Centralized limits and checks applied before anything is sent to the
//! reservation service. Limits mirror what the service itself enforces.

use crate::error::{DeskError, DeskResult};
use chrono::NaiveDate;

// ── Field limits ────────────────────────────────────────────────────

pub const MIN_GUEST_NAME_LEN: usize = 2;
pub const MAX_GUEST_NAME_LEN: usize = 100;

/// Contact numbers: optional leading `+`, then 10-15 digits.
pub const MIN_CONTACT_DIGITS: usize = 10;
pub const MAX_CONTACT_DIGITS: usize = 15;

pub const MAX_ROOM_NUMBER: u32 = 9999;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate a guest name (non-blank, within length limits).
pub fn validate_guest_name(value: &str) -> DeskResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DeskError::Validation("Guest name is required".to_string()));
    }
    if trimmed.len() < MIN_GUEST_NAME_LEN || trimmed.len() > MAX_GUEST_NAME_LEN {
        return Err(DeskError::Validation(format!(
            "Guest name must be between {MIN_GUEST_NAME_LEN} and {MAX_GUEST_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a contact number: optional leading `+`, 10-15 digits.
pub fn validate_contact_number(value: &str) -> DeskResult<()> {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let digit_count = digits.len();
    if !digits.chars().all(|c| c.is_ascii_digit())
        || digit_count < MIN_CONTACT_DIGITS
        || digit_count > MAX_CONTACT_DIGITS
    {
        return Err(DeskError::Validation(format!(
            "Contact number must be {MIN_CONTACT_DIGITS}-{MAX_CONTACT_DIGITS} digits"
        )));
    }
    Ok(())
}

/// Validate a room number is in the service's accepted range.
pub fn validate_room_number(number: u32) -> DeskResult<()> {
    if number == 0 || number > MAX_ROOM_NUMBER {
        return Err(DeskError::Validation(format!(
            "Room number must be between 1 and {MAX_ROOM_NUMBER}"
        )));
    }
    Ok(())
}

/// Validate a stay: check-in not in the past, check-out strictly after.
pub fn validate_stay_dates(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
) -> DeskResult<()> {
    if check_in < today {
        return Err(DeskError::Validation(
            "Check-in date cannot be in the past".to_string(),
        ));
    }
    if check_out <= check_in {
        return Err(DeskError::Validation(
            "Check-out date must be after check-in".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn guest_name_limits() {
        assert!(validate_guest_name("Al").is_ok());
        assert!(validate_guest_name("Alice Moreau").is_ok());
        assert!(validate_guest_name("").is_err());
        assert!(validate_guest_name("   ").is_err());
        assert!(validate_guest_name("A").is_err());
        assert!(validate_guest_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn contact_number_shape() {
        assert!(validate_contact_number("0612345678").is_ok());
        assert!(validate_contact_number("+34600111222").is_ok());
        assert!(validate_contact_number("123456789012345").is_ok());
        assert!(validate_contact_number("123456789").is_err());
        assert!(validate_contact_number("1234567890123456").is_err());
        assert!(validate_contact_number("06-12-34-56-78").is_err());
        assert!(validate_contact_number("call me").is_err());
    }

    #[test]
    fn room_number_range() {
        assert!(validate_room_number(101).is_ok());
        assert!(validate_room_number(9999).is_ok());
        assert!(validate_room_number(0).is_err());
        assert!(validate_room_number(10000).is_err());
    }

    #[test]
    fn stay_dates_rules() {
        let today = date(2025, 6, 10);
        assert!(validate_stay_dates(date(2025, 6, 10), date(2025, 6, 12), today).is_ok());
        assert!(validate_stay_dates(date(2025, 6, 11), date(2025, 6, 12), today).is_ok());
        // Past check-in
        assert!(validate_stay_dates(date(2025, 6, 9), date(2025, 6, 12), today).is_err());
        // Check-out not after check-in
        assert!(validate_stay_dates(date(2025, 6, 11), date(2025, 6, 11), today).is_err());
        assert!(validate_stay_dates(date(2025, 6, 12), date(2025, 6, 11), today).is_err());
    }
}
