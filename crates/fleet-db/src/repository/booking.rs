//! # Booking Repository
//!
//! Database operations for bookings, including the conflict index.
//!
//! ## The Conflict Index
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            How Conflict Detection Works                             │
//! │                                                                     │
//! │  Candidate window:        [start ──────────── end)                  │
//! │                                                                     │
//! │  bookings for vehicle V, status IN (pending, active):               │
//! │    B1 [───────)                          start_time < end   ✗       │
//! │    B2              [────────)            AND end_time > start ✓     │
//! │    B3                            [─────) (cancelled)  ignored       │
//! │                                                                     │
//! │  B2 is returned → the window is taken.                              │
//! │                                                                     │
//! │  Completed and Cancelled bookings NEVER block a window.             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `find_conflicts` runs against any executor so the identical predicate
//! serves the read path (pool) and the allocation engine's transactions.

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::DbResult;
use fleet_core::{Booking, BookingStatus};

/// Column list shared by every booking SELECT.
pub(crate) const BOOKING_COLUMNS: &str = "id, booking_no, renter_id, vehicle_id, \
     pickup_store_id, return_store_id, start_time, end_time, actual_return_time, \
     total_amount_cents, status, created_at, updated_at";

/// Finds bookings on `vehicle_id` whose half-open interval overlaps
/// `[start, end)` and whose status is in `statuses`.
///
/// The overlap condition is the half-open predicate:
/// `booking.start_time < end AND booking.end_time > start`.
/// A booking ending exactly at `start` does not conflict.
///
/// Generic over the executor: pass a pool for read-only checks or an open
/// transaction from the allocation engine so the availability re-check and
/// the booking insert share one atomic unit.
pub async fn find_conflicts<'e, E>(
    executor: E,
    vehicle_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    statuses: &[BookingStatus],
) -> DbResult<Vec<Booking>>
where
    E: sqlx::SqliteExecutor<'e>,
{
    if statuses.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE vehicle_id = "
    ));
    query.push_bind(vehicle_id);
    query.push(" AND status IN (");
    {
        let mut list = query.separated(", ");
        for status in statuses {
            list.push_bind(*status);
        }
    }
    query.push(") AND start_time < ");
    query.push_bind(end);
    query.push(" AND end_time > ");
    query.push_bind(start);

    let conflicts = query
        .build_query_as::<Booking>()
        .fetch_all(executor)
        .await?;

    Ok(conflicts)
}

/// Repository for booking database operations.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    /// Creates a new BookingRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookingRepository { pool }
    }

    /// Gets a booking by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Gets a booking by its human-readable booking number.
    pub async fn get_by_booking_no(&self, booking_no: &str) -> DbResult<Option<Booking>> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_no = ?1"
        ))
        .bind(booking_no)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Lists a renter's bookings, newest first.
    pub async fn list_for_renter(&self, renter_id: &str) -> DbResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE renter_id = ?1 ORDER BY created_at DESC"
        ))
        .bind(renter_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Lists all bookings of a vehicle, newest first.
    pub async fn list_for_vehicle(&self, vehicle_id: &str) -> DbResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings \
             WHERE vehicle_id = ?1 ORDER BY created_at DESC"
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Lists every booking (administrative view).
    pub async fn list_all(&self) -> DbResult<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Read-path conflict check against the pool.
    ///
    /// Listings may act on this freely, but the write path never trusts it:
    /// the allocation engine re-runs the same predicate inside its own
    /// transaction.
    pub async fn find_conflicts(
        &self,
        vehicle_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        statuses: &[BookingStatus],
    ) -> DbResult<Vec<Booking>> {
        debug!(vehicle_id = %vehicle_id, "Checking booking conflicts");
        find_conflicts(&self.pool, vehicle_id, start, end, statuses).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
    }

    /// Inserts a booking row directly, bypassing the engine, so the conflict
    /// predicate can be probed against arbitrary statuses and windows.
    async fn insert_booking(
        db: &Database,
        vehicle_id: &str,
        renter_id: &str,
        store_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: BookingStatus,
        created_at: DateTime<Utc>,
    ) -> Booking {
        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            booking_no: format!("BK-TEST-{}", Uuid::new_v4().simple()),
            renter_id: renter_id.to_string(),
            vehicle_id: vehicle_id.to_string(),
            pickup_store_id: store_id.to_string(),
            return_store_id: store_id.to_string(),
            start_time: start,
            end_time: end,
            actual_return_time: None,
            total_amount_cents: Some(10_000),
            status,
            created_at,
            updated_at: created_at,
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
        .execute(db.pool())
        .await
        .unwrap();

        booking
    }

    async fn seeded_db() -> (Database, String, String, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.stores().create("Downtown", None, None).await.unwrap();
        let category = db.categories().create("Economy", None).await.unwrap();
        let renter = db.renters().create("Dana Reyes", None).await.unwrap();
        let vehicle = fleet_core::Vehicle::register(
            "B-7741",
            None,
            &category.id,
            &store.id,
            10_000,
            at(1, 0),
        )
        .unwrap();
        db.vehicles().insert(&vehicle).await.unwrap();
        (db, vehicle.id, renter.id, store.id)
    }

    #[tokio::test]
    async fn conflicts_respect_status_filter_and_half_open_bounds() {
        let (db, vehicle_id, renter_id, store_id) = seeded_db().await;

        insert_booking(
            &db, &vehicle_id, &renter_id, &store_id,
            at(1, 10), at(3, 10), BookingStatus::Pending, at(1, 0),
        )
        .await;
        insert_booking(
            &db, &vehicle_id, &renter_id, &store_id,
            at(4, 10), at(6, 10), BookingStatus::Cancelled, at(1, 1),
        )
        .await;
        insert_booking(
            &db, &vehicle_id, &renter_id, &store_id,
            at(7, 10), at(9, 10), BookingStatus::Completed, at(1, 2),
        )
        .await;

        let repo = db.bookings();

        // Overlapping the pending window blocks
        let conflicts = repo
            .find_conflicts(&vehicle_id, at(2, 0), at(2, 12), &BookingStatus::BLOCKING)
            .await
            .unwrap();
        assert_eq!(conflicts.len(), 1);

        // Cancelled and completed bookings never block, even dead-on
        let conflicts = repo
            .find_conflicts(&vehicle_id, at(4, 12), at(8, 0), &BookingStatus::BLOCKING)
            .await
            .unwrap();
        assert!(conflicts.is_empty());

        // Half-open: a window starting exactly at end_time does not conflict
        let conflicts = repo
            .find_conflicts(&vehicle_id, at(3, 10), at(4, 0), &BookingStatus::BLOCKING)
            .await
            .unwrap();
        assert!(conflicts.is_empty());

        // ...but one second earlier does
        let conflicts = repo
            .find_conflicts(
                &vehicle_id,
                at(3, 9),
                at(4, 0),
                &BookingStatus::BLOCKING,
            )
            .await
            .unwrap();
        assert_eq!(conflicts.len(), 1);

        // Empty status set matches nothing
        let conflicts = repo
            .find_conflicts(&vehicle_id, at(1, 0), at(9, 0), &[])
            .await
            .unwrap();
        assert!(conflicts.is_empty());
    }

    #[tokio::test]
    async fn renter_listing_is_newest_first() {
        let (db, vehicle_id, renter_id, store_id) = seeded_db().await;

        let older = insert_booking(
            &db, &vehicle_id, &renter_id, &store_id,
            at(1, 10), at(2, 10), BookingStatus::Completed, at(1, 0),
        )
        .await;
        let newer = insert_booking(
            &db, &vehicle_id, &renter_id, &store_id,
            at(5, 10), at(6, 10), BookingStatus::Pending, at(4, 0),
        )
        .await;

        let listed = db.bookings().list_for_renter(&renter_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);

        let by_no = db
            .bookings()
            .get_by_booking_no(&older.booking_no)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_no.id, older.id);
    }
}
