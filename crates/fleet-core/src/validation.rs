//! # Validation Module
//!
//! Input validation for Fleet Rental.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Outer surface (HTTP/CLI, external)                        │
//! │  └── Shape checks (deserialization, required fields)                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL / UNIQUE constraints                                  │
//! │  └── Foreign key constraints                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

use crate::error::{ValidationError, ValidationResult};

/// Longest accepted registration plate.
pub const MAX_PLATE_LEN: usize = 20;

/// Longest accepted display name (stores, categories, renters, models).
pub const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a registration plate.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 20 characters
/// - Only alphanumeric characters and hyphens
///
/// ## Example
/// ```rust
/// use fleet_core::validation::validate_plate_number;
///
/// assert!(validate_plate_number("B-7741").is_ok());
/// assert!(validate_plate_number("").is_err());
/// assert!(validate_plate_number("has space").is_err());
/// ```
pub fn validate_plate_number(plate: &str) -> ValidationResult<()> {
    let plate = plate.trim();

    if plate.is_empty() {
        return Err(ValidationError::Required {
            field: "plate_number".to_string(),
        });
    }

    if plate.len() > MAX_PLATE_LEN {
        return Err(ValidationError::TooLong {
            field: "plate_number".to_string(),
            max: MAX_PLATE_LEN,
        });
    }

    if !plate.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "plate_number".to_string(),
            reason: "must contain only letters, numbers and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name (store, category, renter, model).
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a daily rate in cents.
///
/// ## Rules
/// - Must be strictly positive; a free or negative rate is always a caller
///   mistake in this domain.
pub fn validate_daily_rate_cents(cents: i64) -> ValidationResult<()> {
    if cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "daily_rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a cost amount in cents (maintenance, ledger).
///
/// Zero is allowed; negative is not.
pub fn validate_cost_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "cost".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Window Validators
// =============================================================================

/// Validates a requested booking window against the current time.
///
/// ## Rules
/// - `start < end` (half-open, non-empty)
/// - `start ≥ now` (no bookings opening in the past)
///
/// The same rules gate both booking creation and the availability search, so
/// the two paths can never disagree about what a legal window is.
///
/// ## Example
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use fleet_core::validation::validate_booking_window;
///
/// let now = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
/// let start = now + Duration::hours(1);
/// let end = start + Duration::days(2);
///
/// assert!(validate_booking_window(start, end, now).is_ok());
/// assert!(validate_booking_window(end, start, now).is_err());
/// assert!(validate_booking_window(now - Duration::hours(1), end, now).is_err());
/// ```
pub fn validate_booking_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ValidationResult<()> {
    if start >= end {
        return Err(ValidationError::EmptyWindow);
    }

    if start < now {
        return Err(ValidationError::StartInPast);
    }

    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use fleet_core::validation::validate_entity_id;
///
/// assert!(validate_entity_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_entity_id("not-a-uuid").is_err());
/// ```
pub fn validate_entity_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_validate_plate_number() {
        assert!(validate_plate_number("B-7741").is_ok());
        assert!(validate_plate_number("ABC123").is_ok());

        assert!(validate_plate_number("").is_err());
        assert!(validate_plate_number("   ").is_err());
        assert!(validate_plate_number("has space").is_err());
        assert!(validate_plate_number(&"A".repeat(30)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("store_name", "Downtown Branch").is_ok());
        assert!(validate_name("store_name", "").is_err());
        assert!(validate_name("store_name", &"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_daily_rate() {
        assert!(validate_daily_rate_cents(9999).is_ok());
        assert!(validate_daily_rate_cents(0).is_err());
        assert!(validate_daily_rate_cents(-100).is_err());
    }

    #[test]
    fn test_validate_cost_allows_zero() {
        assert!(validate_cost_cents(0).is_ok());
        assert!(validate_cost_cents(5000).is_ok());
        assert!(validate_cost_cents(-1).is_err());
    }

    #[test]
    fn test_validate_booking_window() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
        let start = now + Duration::hours(2);
        let end = start + Duration::days(1);

        assert!(validate_booking_window(start, end, now).is_ok());
        // Starting exactly now is allowed
        assert!(validate_booking_window(now, end, now).is_ok());

        assert!(matches!(
            validate_booking_window(end, start, now),
            Err(ValidationError::EmptyWindow)
        ));
        assert!(matches!(
            validate_booking_window(start, start, now),
            Err(ValidationError::EmptyWindow)
        ));
        assert!(matches!(
            validate_booking_window(now - Duration::seconds(1), end, now),
            Err(ValidationError::StartInPast)
        ));
    }

    #[test]
    fn test_validate_entity_id() {
        assert!(validate_entity_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_entity_id("").is_err());
        assert!(validate_entity_id("not-a-uuid").is_err());
    }
}
