//! # Domain Types
//!
//! Core domain types used throughout Fleet Rental.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │    Vehicle      │   │     Booking     │   │   LedgerEntry   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │   │
//! │  │  plate_number   │   │  booking_no     │   │  booking_id(FK) │   │
//! │  │  status         │   │  status         │   │  category       │   │
//! │  │  daily_rate     │   │  total_amount   │   │  amount_cents   │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘   │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐   │
//! │  │ VehicleStatus   │   │  BookingStatus  │   │ LedgerCategory  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │   │
//! │  │  Idle           │   │  Pending        │   │  Deposit        │   │
//! │  │  Rented         │   │  Active         │   │  Final          │   │
//! │  │  UnderMaint.    │   │  Completed      │   │  Penalty        │   │
//! │  │  Transferring   │   │  Cancelled      │   └─────────────────┘   │
//! │  └─────────────────┘   └─────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for database relations
//! - Business ID: (plate_number, booking_no) - human-readable, scannable

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Vehicle Status
// =============================================================================

/// The status of a vehicle in the fleet.
///
/// Mutated only by the allocation engine (on booking create/return/cancel)
/// and by the maintenance workflow. At most one booking in a blocking status
/// may hold a vehicle at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Available for allocation.
    Idle,
    /// Held by a booking (pending pickup or on the road).
    Rented,
    /// Taken out of the pool by the maintenance workflow.
    UnderMaintenance,
    /// Being relocated between stores.
    Transferring,
}

impl VehicleStatus {
    /// Only an Idle vehicle can be allocated or taken into maintenance.
    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, VehicleStatus::Idle)
    }
}

impl Default for VehicleStatus {
    fn default() -> Self {
        VehicleStatus::Idle
    }
}

// =============================================================================
// Booking Status
// =============================================================================

/// The status of a booking.
///
/// Transitions are monotonic: nothing leaves Completed or Cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Reserved; immediately eligible for use (no separate "confirmed" state).
    Pending,
    /// Vehicle picked up and on the road.
    Active,
    /// Returned; terminal.
    Completed,
    /// Cancelled before completion; terminal.
    Cancelled,
}

impl BookingStatus {
    /// Statuses that participate in conflict checks. Completed and Cancelled
    /// bookings never block a window.
    pub const BLOCKING: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Active];

    /// Terminal statuses admit no further transition.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Whether a booking in this status holds its vehicle and window.
    #[inline]
    pub const fn is_blocking(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Active)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::Pending
    }
}

// =============================================================================
// Ledger Category
// =============================================================================

/// The category of a ledger entry. Immutable once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum LedgerCategory {
    /// Collected at booking creation (daily rate × 3).
    Deposit,
    /// The settled rental total, recorded at return.
    Final,
    /// Overdue surcharge, recorded at late return.
    Penalty,
}

// =============================================================================
// Vehicle
// =============================================================================

/// A rentable vehicle unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Vehicle {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Registration plate - business identifier, globally unique.
    pub plate_number: String,

    /// Manufacturer model description.
    pub model: Option<String>,

    /// Category this vehicle belongs to.
    pub category_id: String,

    /// Home store. Reassigned on one-way returns.
    pub store_id: String,

    /// Current allocation status.
    pub status: VehicleStatus,

    /// Daily rate in cents (smallest currency unit), always positive.
    pub daily_rate_cents: i64,

    /// When the vehicle was registered.
    pub created_at: DateTime<Utc>,

    /// When the vehicle was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Builds a validated vehicle ready for registration.
    ///
    /// New vehicles start Idle at their home store.
    pub fn register(
        plate_number: &str,
        model: Option<String>,
        category_id: &str,
        store_id: &str,
        daily_rate_cents: i64,
        now: DateTime<Utc>,
    ) -> Result<Self, crate::error::ValidationError> {
        crate::validation::validate_plate_number(plate_number)?;
        crate::validation::validate_daily_rate_cents(daily_rate_cents)?;

        Ok(Vehicle {
            id: uuid::Uuid::new_v4().to_string(),
            plate_number: plate_number.trim().to_string(),
            model,
            category_id: category_id.to_string(),
            store_id: store_id.to_string(),
            status: VehicleStatus::Idle,
            daily_rate_cents,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the daily rate as a Money type.
    #[inline]
    pub fn daily_rate(&self) -> Money {
        Money::from_cents(self.daily_rate_cents)
    }
}

// =============================================================================
// Booking
// =============================================================================

/// A reservation of one vehicle for one time interval.
///
/// The interval is half-open: `[start_time, end_time)`. A booking ending
/// exactly when another starts does not conflict with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: String,

    /// Globally unique, human-scannable reference code.
    pub booking_no: String,

    pub renter_id: String,
    pub vehicle_id: String,

    /// Store the vehicle is picked up from.
    pub pickup_store_id: String,

    /// Store the renter declared for the return.
    pub return_store_id: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    /// Set once on return; null while the booking is open.
    pub actual_return_time: Option<DateTime<Utc>>,

    /// Computed total in cents. Null only before the first computation;
    /// augmented with the penalty on an overdue return.
    pub total_amount_cents: Option<i64>,

    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Returns the computed total as Money, if computed.
    #[inline]
    pub fn total_amount(&self) -> Option<Money> {
        self.total_amount_cents.map(Money::from_cents)
    }
}

// =============================================================================
// Ledger Entry
// =============================================================================

/// A monetary event tied to a booking.
///
/// The ledger is bookkeeping, not settlement: entries are causally triggered
/// by allocation transitions but their persistence never gates a booking
/// state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LedgerEntry {
    pub id: String,

    /// Owning booking. Deleting the booking cascades.
    pub booking_id: String,

    /// Amount in cents, never negative.
    pub amount_cents: i64,

    pub category: LedgerCategory,

    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Returns the entry amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_cents(self.amount_cents)
    }
}

// =============================================================================
// Lookup Entities
// =============================================================================

/// A rental store (pickup/return location and vehicle home base).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A vehicle category (economy, SUV, van, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer who places bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Renter {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Maintenance
// =============================================================================

/// The kind of work recorded against a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Repair,
    Service,
    Inspection,
}

/// A maintenance record. While open (no end date) the vehicle is out of the
/// allocation pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MaintenanceRecord {
    pub id: String,
    pub vehicle_id: String,
    pub kind: MaintenanceKind,
    pub start_date: NaiveDate,
    /// Null while the work is in progress.
    pub end_date: Option<NaiveDate>,
    pub cost_cents: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceRecord {
    /// Returns the recorded cost as Money.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_booking_status_terminal() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Active.is_terminal());
        assert!(BookingStatus::Completed.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_blocking_statuses() {
        for status in BookingStatus::BLOCKING {
            assert!(status.is_blocking());
            assert!(!status.is_terminal());
        }
        assert!(!BookingStatus::Completed.is_blocking());
        assert!(!BookingStatus::Cancelled.is_blocking());
    }

    #[test]
    fn test_vehicle_status_default() {
        assert_eq!(VehicleStatus::default(), VehicleStatus::Idle);
        assert!(VehicleStatus::Idle.is_idle());
        assert!(!VehicleStatus::Rented.is_idle());
    }

    #[test]
    fn test_status_wire_format() {
        // The serialized names are part of the external contract; the
        // database CHECK constraints use the same spellings.
        assert_eq!(
            serde_json::to_string(&BookingStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&VehicleStatus::UnderMaintenance).unwrap(),
            "\"under_maintenance\""
        );
        assert_eq!(
            serde_json::to_string(&LedgerCategory::Penalty).unwrap(),
            "\"penalty\""
        );
    }

    #[test]
    fn test_vehicle_register_validates() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap();

        let vehicle =
            Vehicle::register("B-7741", None, "cat-1", "store-1", 9_900, now).unwrap();
        assert_eq!(vehicle.status, VehicleStatus::Idle);
        assert_eq!(vehicle.daily_rate().cents(), 9_900);

        assert!(Vehicle::register("", None, "cat-1", "store-1", 9_900, now).is_err());
        assert!(Vehicle::register("B-7741", None, "cat-1", "store-1", 0, now).is_err());
    }
}
