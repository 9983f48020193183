//! # Allocation Engine
//!
//! Orchestrates the booking lifecycle: availability check, vehicle status
//! flip, booking creation, pickup/return/cancel transitions, pricing and
//! ledger bookkeeping.
//!
//! ## Booking Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Booking State Machine                           │
//! │                                                                     │
//! │   create_booking                                                    │
//! │        │                                                            │
//! │        ▼         pickup_booking                                     │
//! │    ┌────────┐ ─────────────────► ┌────────┐                         │
//! │    │Pending │                    │ Active │                         │
//! │    └───┬────┘ ◄──── (blocking) ──└───┬────┘                         │
//! │        │                             │                              │
//! │        │ complete_booking / cancel_booking                          │
//! │        ▼                             ▼                              │
//! │    ┌─────────┐                 ┌───────────┐                        │
//! │    │Cancelled│                 │ Completed │    (terminal)          │
//! │    └─────────┘                 └───────────┘                        │
//! │                                                                     │
//! │   Vehicle mirrors:  Idle ──create──► Rented ──return/cancel──► Idle │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Control
//! Every state-changing operation is one transaction. The FIRST statement of
//! a create is a guarded `UPDATE vehicles SET status = 'rented' WHERE status
//! = 'idle'`: under SQLite's single-writer model this orders competing
//! transactions, and the loser of a race reads back zero affected rows and
//! fails with a conflict instead of double-booking. Lock waits are bounded by
//! the connection busy timeout and surface as a retryable [`EngineError::Contended`].

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use crate::repository::booking::{find_conflicts, BOOKING_COLUMNS};
use crate::repository::maintenance::MAINTENANCE_COLUMNS;
use crate::repository::vehicle::VEHICLE_COLUMNS;
use fleet_core::validation::{validate_booking_window, validate_cost_cents};
use fleet_core::{
    pricing, Booking, BookingStatus, Clock, CoreError, Interval, LedgerCategory,
    MaintenanceKind, MaintenanceRecord, Store, SystemClock, ValidationError, Vehicle,
    VehicleStatus,
};

// =============================================================================
// Engine Error
// =============================================================================

/// Coarse classification of an engine failure, for mapping onto an outer
/// transport (HTTP status, exit code) without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or out-of-range input. Caller error, not retried.
    Validation,
    /// A referenced entity does not exist. Caller error.
    NotFound,
    /// Business-rule violation or lost race. The caller may retry with a
    /// different window/vehicle; contended losses may be retried as-is.
    Conflict,
    /// Store unreachable or misbehaving. Logged, surfaced, never swallowed.
    Infrastructure,
}

/// The allocation engine's error surface.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Business rule violation or missing reference.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Lost a lock race past the busy timeout. Safe to retry as-is.
    #[error("Operation contended, retry: {0}")]
    Contended(String),

    /// Infrastructure failure in the backing store.
    #[error(transparent)]
    Db(DbError),
}

impl EngineError {
    /// Classifies the failure for an external caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Core(CoreError::Validation(_)) => ErrorKind::Validation,
            EngineError::Core(
                CoreError::VehicleNotFound(_)
                | CoreError::BookingNotFound(_)
                | CoreError::RenterNotFound(_)
                | CoreError::StoreNotFound(_)
                | CoreError::CategoryNotFound(_)
                | CoreError::MaintenanceNotFound(_),
            ) => ErrorKind::NotFound,
            EngineError::Core(_) => ErrorKind::Conflict,
            EngineError::Contended(_) => ErrorKind::Conflict,
            EngineError::Db(_) => ErrorKind::Infrastructure,
        }
    }

    /// Whether retrying the exact same call can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::Contended(_))
    }
}

impl From<DbError> for EngineError {
    fn from(err: DbError) -> Self {
        if err.is_retryable() {
            EngineError::Contended(err.to_string())
        } else {
            EngineError::Db(err)
        }
    }
}

impl From<ValidationError> for EngineError {
    fn from(err: ValidationError) -> Self {
        EngineError::Core(CoreError::Validation(err))
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

// =============================================================================
// Booking Request
// =============================================================================

/// Input for [`AllocationEngine::create_booking`]. All references are opaque
/// ids resolved by the engine; no live object graphs cross this boundary.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub renter_id: String,
    pub vehicle_id: String,
    pub pickup_store_id: String,
    pub return_store_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

// =============================================================================
// Allocation Engine
// =============================================================================

/// The reservation & allocation engine.
///
/// Invoked by many concurrent request handlers; holds no state beyond the
/// pool handle and the injected clock, so it is freely cloneable.
#[derive(Clone)]
pub struct AllocationEngine {
    db: Database,
    clock: Arc<dyn Clock>,
}

impl AllocationEngine {
    /// Creates an engine over a database with an injected clock.
    pub fn new(db: &Database, clock: Arc<dyn Clock>) -> Self {
        AllocationEngine {
            db: db.clone(),
            clock,
        }
    }

    /// Creates an engine reading the real wall clock. Production default.
    pub fn with_system_clock(db: &Database) -> Self {
        AllocationEngine::new(db, Arc::new(SystemClock))
    }

    fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }

    // =========================================================================
    // create
    // =========================================================================

    /// Creates a booking.
    ///
    /// ## Steps
    /// 1. Window validation: `start < end`, `start ≥ now`
    /// 2. Resolve renter, vehicle, pickup and return stores
    /// 3. In one transaction: flip the vehicle Idle→Rented under guard,
    ///    re-check conflicts over {Pending, Active}, compute the amount and
    ///    insert the booking
    /// 4. Record the Deposit ledger entry (best-effort)
    ///
    /// Two concurrent calls for overlapping windows on one vehicle cannot
    /// both succeed: the guarded flip is the transaction's first write, so
    /// the loser observes a non-Idle vehicle and fails with a conflict.
    pub async fn create_booking(&self, request: &BookingRequest) -> EngineResult<Booking> {
        let now = self.clock.now();
        validate_booking_window(request.start_time, request.end_time, now)?;

        // Resolve every reference up front; the write re-validates the parts
        // that can race.
        self.db
            .renters()
            .get_by_id(&request.renter_id)
            .await?
            .ok_or_else(|| CoreError::RenterNotFound(request.renter_id.clone()))?;
        let vehicle = self
            .db
            .vehicles()
            .get_by_id(&request.vehicle_id)
            .await?
            .ok_or_else(|| CoreError::VehicleNotFound(request.vehicle_id.clone()))?;
        self.resolve_store(&request.pickup_store_id).await?;
        self.resolve_store(&request.return_store_id).await?;

        // Friendly early rejection; the authoritative check is the guarded
        // flip below.
        if !vehicle.status.is_idle() {
            return Err(CoreError::VehicleNotAllocatable {
                plate: vehicle.plate_number,
                status: vehicle.status,
            }
            .into());
        }

        let mut tx = self.pool().begin().await.map_err(DbError::from)?;

        let flipped = sqlx::query(
            "UPDATE vehicles SET status = ?2, updated_at = ?3 WHERE id = ?1 AND status = ?4",
        )
        .bind(&vehicle.id)
        .bind(VehicleStatus::Rented)
        .bind(now)
        .bind(VehicleStatus::Idle)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        if flipped.rows_affected() == 0 {
            // Lost the race: another transaction took the vehicle first.
            let status: VehicleStatus =
                sqlx::query_scalar("SELECT status FROM vehicles WHERE id = ?1")
                    .bind(&vehicle.id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(DbError::from)?;
            return Err(CoreError::VehicleNotAllocatable {
                plate: vehicle.plate_number,
                status,
            }
            .into());
        }

        let conflicts = find_conflicts(
            &mut *tx,
            &vehicle.id,
            request.start_time,
            request.end_time,
            &BookingStatus::BLOCKING,
        )
        .await?;

        if !conflicts.is_empty() {
            debug!(
                vehicle_id = %vehicle.id,
                conflicts = conflicts.len(),
                "Requested window already booked"
            );
            tx.rollback().await.map_err(DbError::from)?;
            return Err(CoreError::WindowConflict {
                plate: vehicle.plate_number,
            }
            .into());
        }

        let amount = pricing::rental_total(
            vehicle.daily_rate(),
            request.start_time,
            request.end_time,
        );

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            booking_no: generate_booking_no(now),
            renter_id: request.renter_id.clone(),
            vehicle_id: vehicle.id.clone(),
            pickup_store_id: request.pickup_store_id.clone(),
            return_store_id: request.return_store_id.clone(),
            start_time: request.start_time,
            end_time: request.end_time,
            actual_return_time: None,
            total_amount_cents: Some(amount.cents()),
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO bookings (
                id, booking_no, renter_id, vehicle_id,
                pickup_store_id, return_store_id,
                start_time, end_time, actual_return_time,
                total_amount_cents, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )
        .bind(&booking.id)
        .bind(&booking.booking_no)
        .bind(&booking.renter_id)
        .bind(&booking.vehicle_id)
        .bind(&booking.pickup_store_id)
        .bind(&booking.return_store_id)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(booking.actual_return_time)
        .bind(booking.total_amount_cents)
        .bind(booking.status)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        info!(
            booking_no = %booking.booking_no,
            vehicle = %booking.vehicle_id,
            amount = %amount,
            "Booking created"
        );

        // Deposit bookkeeping never gates the booking itself.
        let deposit = pricing::deposit_amount(vehicle.daily_rate());
        if let Err(err) = self
            .db
            .ledger()
            .record(&booking.id, deposit, LedgerCategory::Deposit, now)
            .await
        {
            warn!(booking_id = %booking.id, error = %err, "Failed to record deposit ledger entry");
        }

        Ok(booking)
    }

    // =========================================================================
    // pickup
    // =========================================================================

    /// Marks a Pending booking Active at physical pickup.
    ///
    /// Optional step: return and cancel accept both Pending and Active, and
    /// both statuses block conflicting windows identically.
    pub async fn pickup_booking(&self, booking_id: &str) -> EngineResult<Booking> {
        let now = self.clock.now();

        let mut tx = self.pool().begin().await.map_err(DbError::from)?;

        let mut booking = fetch_booking(&mut *tx, booking_id)
            .await?
            .ok_or_else(|| CoreError::BookingNotFound(booking_id.to_string()))?;

        if booking.status != BookingStatus::Pending {
            return Err(CoreError::InvalidBookingStatus {
                booking_no: booking.booking_no,
                status: booking.status,
            }
            .into());
        }

        sqlx::query(
            "UPDATE bookings SET status = ?2, updated_at = ?3 WHERE id = ?1 AND status = ?4",
        )
        .bind(&booking.id)
        .bind(BookingStatus::Active)
        .bind(now)
        .bind(BookingStatus::Pending)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        booking.status = BookingStatus::Active;
        booking.updated_at = now;

        info!(booking_no = %booking.booking_no, "Booking picked up");
        Ok(booking)
    }

    // =========================================================================
    // return
    // =========================================================================

    /// Completes a booking ("return").
    ///
    /// ## Steps
    /// 1. Booking must exist and be Pending or Active
    /// 2. Record the actual return time
    /// 3. Overdue returns accrue `daily_rate × overdue_days × 1.5`, added to
    ///    the total
    /// 4. One-way returns reassign the vehicle's home store
    /// 5. Vehicle returns to Idle; everything persists in one transaction
    /// 6. Final (and Penalty, when accrued) ledger entries - best-effort
    pub async fn complete_booking(
        &self,
        booking_id: &str,
        return_store_id: &str,
    ) -> EngineResult<Booking> {
        let now = self.clock.now();

        let mut tx = self.pool().begin().await.map_err(DbError::from)?;

        let mut booking = fetch_booking(&mut *tx, booking_id)
            .await?
            .ok_or_else(|| CoreError::BookingNotFound(booking_id.to_string()))?;

        if booking.status.is_terminal() {
            return Err(CoreError::InvalidBookingStatus {
                booking_no: booking.booking_no,
                status: booking.status,
            }
            .into());
        }

        let vehicle = fetch_vehicle(&mut *tx, &booking.vehicle_id)
            .await?
            .ok_or_else(|| CoreError::VehicleNotFound(booking.vehicle_id.clone()))?;

        let return_store = fetch_store(&mut *tx, return_store_id)
            .await?
            .ok_or_else(|| CoreError::StoreNotFound(return_store_id.to_string()))?;

        let penalty = pricing::overdue_penalty(vehicle.daily_rate(), booking.end_time, now);
        let base = booking.total_amount().unwrap_or_else(|| {
            pricing::rental_total(vehicle.daily_rate(), booking.start_time, booking.end_time)
        });
        let total = base + penalty;

        let updated = sqlx::query(
            "UPDATE bookings SET
                status = ?2,
                actual_return_time = ?3,
                total_amount_cents = ?4,
                updated_at = ?3
             WHERE id = ?1 AND status IN (?5, ?6)",
        )
        .bind(&booking.id)
        .bind(BookingStatus::Completed)
        .bind(now)
        .bind(total.cents())
        .bind(BookingStatus::Pending)
        .bind(BookingStatus::Active)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        if updated.rows_affected() == 0 {
            return Err(CoreError::InvalidBookingStatus {
                booking_no: booking.booking_no,
                status: booking.status,
            }
            .into());
        }

        // One-way return: the vehicle's new home is wherever it was dropped.
        let home_store_id = if vehicle.store_id != return_store.id {
            info!(
                plate = %vehicle.plate_number,
                from = %vehicle.store_id,
                to = %return_store.id,
                "One-way return, relocating vehicle"
            );
            return_store.id.clone()
        } else {
            vehicle.store_id.clone()
        };

        sqlx::query(
            "UPDATE vehicles SET status = ?2, store_id = ?3, updated_at = ?4 WHERE id = ?1",
        )
        .bind(&vehicle.id)
        .bind(VehicleStatus::Idle)
        .bind(&home_store_id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        booking.status = BookingStatus::Completed;
        booking.actual_return_time = Some(now);
        booking.total_amount_cents = Some(total.cents());
        booking.updated_at = now;

        info!(
            booking_no = %booking.booking_no,
            total = %total,
            penalty = %penalty,
            "Booking completed"
        );

        if let Err(err) = self
            .db
            .ledger()
            .record(&booking.id, total, LedgerCategory::Final, now)
            .await
        {
            warn!(booking_id = %booking.id, error = %err, "Failed to record final ledger entry");
        }
        if penalty.is_positive() {
            if let Err(err) = self
                .db
                .ledger()
                .record(&booking.id, penalty, LedgerCategory::Penalty, now)
                .await
            {
                warn!(booking_id = %booking.id, error = %err, "Failed to record penalty ledger entry");
            }
        }

        Ok(booking)
    }

    // =========================================================================
    // cancel
    // =========================================================================

    /// Cancels a booking and frees its vehicle.
    ///
    /// Cancelling an already-terminal booking fails with a conflict and
    /// leaves vehicle state untouched.
    pub async fn cancel_booking(&self, booking_id: &str) -> EngineResult<()> {
        let now = self.clock.now();

        let mut tx = self.pool().begin().await.map_err(DbError::from)?;

        let booking = fetch_booking(&mut *tx, booking_id)
            .await?
            .ok_or_else(|| CoreError::BookingNotFound(booking_id.to_string()))?;

        if booking.status.is_terminal() {
            return Err(CoreError::InvalidBookingStatus {
                booking_no: booking.booking_no,
                status: booking.status,
            }
            .into());
        }

        sqlx::query(
            "UPDATE bookings SET status = ?2, updated_at = ?3 WHERE id = ?1 AND status IN (?4, ?5)",
        )
        .bind(&booking.id)
        .bind(BookingStatus::Cancelled)
        .bind(now)
        .bind(BookingStatus::Pending)
        .bind(BookingStatus::Active)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        sqlx::query("UPDATE vehicles SET status = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(&booking.vehicle_id)
            .bind(VehicleStatus::Idle)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        info!(booking_no = %booking.booking_no, "Booking cancelled");
        Ok(())
    }

    // =========================================================================
    // read paths
    // =========================================================================

    /// Vehicles at `store_id` that are Idle and free of blocking conflicts
    /// in `[start, end)`.
    ///
    /// Same window rules and the same conflict predicate as
    /// [`create_booking`], so this never offers a vehicle the write path
    /// would reject. Runs read-committed without locks; the write path
    /// re-validates under its own transaction.
    pub async fn search_available(
        &self,
        store_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<Vec<Vehicle>> {
        let now = self.clock.now();
        validate_booking_window(start, end, now)?;

        self.resolve_store(store_id).await?;

        let vehicles = self.db.vehicles().find_available(store_id, start, end).await?;
        Ok(vehicles)
    }

    /// Whether one vehicle could take `[start, end)` right now: Idle and no
    /// blocking conflict. Advisory only - the write path re-checks.
    pub async fn is_available(
        &self,
        vehicle_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> EngineResult<bool> {
        let window = Interval::new(start, end)?;

        let vehicle = self
            .db
            .vehicles()
            .get_by_id(vehicle_id)
            .await?
            .ok_or_else(|| CoreError::VehicleNotFound(vehicle_id.to_string()))?;

        if !vehicle.status.is_idle() {
            return Ok(false);
        }

        let conflicts = self
            .db
            .bookings()
            .find_conflicts(
                vehicle_id,
                window.start(),
                window.end(),
                &BookingStatus::BLOCKING,
            )
            .await?;

        Ok(conflicts.is_empty())
    }

    // =========================================================================
    // maintenance workflow
    // =========================================================================

    /// Takes an Idle vehicle out of the pool and opens a maintenance record.
    ///
    /// The guarded Idle→UnderMaintenance flip enforces the exclusivity
    /// invariant: a vehicle held by a blocking booking can never enter
    /// maintenance.
    pub async fn open_maintenance(
        &self,
        vehicle_id: &str,
        kind: MaintenanceKind,
        cost_cents: i64,
        notes: Option<String>,
    ) -> EngineResult<MaintenanceRecord> {
        validate_cost_cents(cost_cents)?;
        let now = self.clock.now();

        let mut tx = self.pool().begin().await.map_err(DbError::from)?;

        let vehicle = fetch_vehicle(&mut *tx, vehicle_id)
            .await?
            .ok_or_else(|| CoreError::VehicleNotFound(vehicle_id.to_string()))?;

        let flipped = sqlx::query(
            "UPDATE vehicles SET status = ?2, updated_at = ?3 WHERE id = ?1 AND status = ?4",
        )
        .bind(&vehicle.id)
        .bind(VehicleStatus::UnderMaintenance)
        .bind(now)
        .bind(VehicleStatus::Idle)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        if flipped.rows_affected() == 0 {
            return Err(CoreError::VehicleNotAllocatable {
                plate: vehicle.plate_number,
                status: vehicle.status,
            }
            .into());
        }

        let record = MaintenanceRecord {
            id: Uuid::new_v4().to_string(),
            vehicle_id: vehicle.id.clone(),
            kind,
            start_date: now.date_naive(),
            end_date: None,
            cost_cents,
            notes,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO maintenance_records (
                id, vehicle_id, kind, start_date, end_date,
                cost_cents, notes, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&record.id)
        .bind(&record.vehicle_id)
        .bind(record.kind)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.cost_cents)
        .bind(&record.notes)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        info!(plate = %vehicle.plate_number, ?kind, "Vehicle entered maintenance");
        Ok(record)
    }

    /// Closes a maintenance record and returns the vehicle to the pool.
    pub async fn close_maintenance(&self, record_id: &str) -> EngineResult<MaintenanceRecord> {
        let now = self.clock.now();

        let mut tx = self.pool().begin().await.map_err(DbError::from)?;

        let mut record = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records WHERE id = ?1"
        ))
        .bind(record_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(DbError::from)?
        .ok_or_else(|| CoreError::MaintenanceNotFound(record_id.to_string()))?;

        if record.end_date.is_some() {
            return Err(CoreError::MaintenanceClosed(record_id.to_string()).into());
        }

        let end_date = now.date_naive();

        sqlx::query(
            "UPDATE maintenance_records SET end_date = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(&record.id)
        .bind(end_date)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        // Only flip back from UnderMaintenance; an administrative override
        // (e.g. Transferring) stands.
        sqlx::query(
            "UPDATE vehicles SET status = ?2, updated_at = ?3 WHERE id = ?1 AND status = ?4",
        )
        .bind(&record.vehicle_id)
        .bind(VehicleStatus::Idle)
        .bind(now)
        .bind(VehicleStatus::UnderMaintenance)
        .execute(&mut *tx)
        .await
        .map_err(DbError::from)?;

        tx.commit().await.map_err(DbError::from)?;

        record.end_date = Some(end_date);
        record.updated_at = now;

        info!(record_id = %record.id, "Maintenance closed, vehicle back in pool");
        Ok(record)
    }

    // =========================================================================
    // helpers
    // =========================================================================

    async fn resolve_store(&self, store_id: &str) -> EngineResult<Store> {
        self.db
            .stores()
            .get_by_id(store_id)
            .await?
            .ok_or_else(|| CoreError::StoreNotFound(store_id.to_string()).into())
    }
}

/// Generates a globally unique, human-scannable booking number.
///
/// Format: `BK-{unix_millis}-{8 hex chars}`, e.g. `BK-1785736800000-9F86D081`.
/// The timestamp prefix keeps numbers roughly sortable and scannable; the
/// random suffix guarantees uniqueness.
fn generate_booking_no(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    format!("BK-{}-{}", now.timestamp_millis(), suffix)
}

async fn fetch_booking<'e, E>(executor: E, id: &str) -> DbResult<Option<Booking>>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let booking = sqlx::query_as::<_, Booking>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(booking)
}

async fn fetch_vehicle<'e, E>(executor: E, id: &str) -> DbResult<Option<Vehicle>>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
        "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = ?1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(vehicle)
}

async fn fetch_store<'e, E>(executor: E, id: &str) -> DbResult<Option<Store>>
where
    E: sqlx::SqliteExecutor<'e>,
{
    let store = sqlx::query_as::<_, Store>(
        "SELECT id, name, address, phone, created_at, updated_at FROM stores WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(store)
}

// =============================================================================
// Unit Tests
// =============================================================================
