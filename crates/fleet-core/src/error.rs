//! # Error Types
//!
//! Domain-specific error types for fleet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  fleet-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                    │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  fleet-db errors (separate crate)                                   │
//! │  ├── DbError          - Database operation failures                 │
//! │  └── EngineError      - Allocation engine surface                   │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → EngineError → external caller  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (plate, booking number, status)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a user-facing message

use thiserror::Error;

use crate::types::{BookingStatus, VehicleStatus};

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations and missing-reference failures.
///
/// Not-found variants are caller errors (a dangling id); the remaining
/// variants are allocation conflicts the caller may retry with a different
/// vehicle or window.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Vehicle id does not resolve.
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    /// Booking id or booking number does not resolve.
    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    /// Renter id does not resolve.
    #[error("Renter not found: {0}")]
    RenterNotFound(String),

    /// Store id does not resolve.
    #[error("Store not found: {0}")]
    StoreNotFound(String),

    /// Category id does not resolve.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Maintenance record id does not resolve.
    #[error("Maintenance record not found: {0}")]
    MaintenanceNotFound(String),

    /// The maintenance record has an end date and cannot be closed again.
    #[error("Maintenance record {0} is already closed")]
    MaintenanceClosed(String),

    /// The vehicle is not Idle, so no new booking (or maintenance) can take
    /// it, regardless of the requested window.
    #[error("Vehicle {plate} is {status:?}, not currently allocatable")]
    VehicleNotAllocatable {
        plate: String,
        status: VehicleStatus,
    },

    /// A blocking booking already overlaps the requested window.
    #[error("Vehicle {plate} is already booked in the requested window")]
    WindowConflict { plate: String },

    /// The booking is not in a status that allows the requested transition.
    ///
    /// ## When This Occurs
    /// - Returning or cancelling a Completed/Cancelled booking
    /// - Picking up a booking that is not Pending
    #[error("Booking {booking_no} is {status:?}, cannot perform transition")]
    InvalidBookingStatus {
        booking_no: String,
        status: BookingStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// The booking window is empty or inverted.
    #[error("start time must be strictly before end time")]
    EmptyWindow,

    /// The booking window starts before the current time.
    #[error("start time must not be in the past")]
    StartInPast,
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
