//! # Vehicle Repository
//!
//! Database operations for the vehicle fleet.
//!
//! ## Key Operations
//! - CRUD and lookups (by id, by plate)
//! - Availability search for a store and window
//! - Administrative status changes
//!
//! Status flips that belong to the booking lifecycle (Idle ⇄ Rented) are
//! owned by the allocation engine, not this repository.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use fleet_core::{BookingStatus, Vehicle, VehicleStatus};

/// Column list shared by every vehicle SELECT.
pub(crate) const VEHICLE_COLUMNS: &str =
    "id, plate_number, model, category_id, store_id, status, daily_rate_cents, \
     created_at, updated_at";

/// Repository for vehicle database operations.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        VehicleRepository { pool }
    }

    /// Gets a vehicle by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Gets a vehicle by its registration plate.
    pub async fn get_by_plate(&self, plate_number: &str) -> DbResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE plate_number = ?1"
        ))
        .bind(plate_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Inserts a vehicle row.
    ///
    /// Build validated vehicles with [`Vehicle::register`]; duplicate plates
    /// are rejected by the UNIQUE constraint.
    pub async fn insert(&self, vehicle: &Vehicle) -> DbResult<()> {
        debug!(plate = %vehicle.plate_number, "Registering vehicle");

        sqlx::query(
            "INSERT INTO vehicles (
                id, plate_number, model, category_id, store_id,
                status, daily_rate_cents, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )
        .bind(&vehicle.id)
        .bind(&vehicle.plate_number)
        .bind(&vehicle.model)
        .bind(&vehicle.category_id)
        .bind(&vehicle.store_id)
        .bind(vehicle.status)
        .bind(vehicle.daily_rate_cents)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists all vehicles homed at a store.
    pub async fn list_by_store(&self, store_id: &str) -> DbResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles \
             WHERE store_id = ?1 ORDER BY plate_number"
        ))
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Lists all vehicles in a category.
    pub async fn list_by_category(&self, category_id: &str) -> DbResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles \
             WHERE category_id = ?1 ORDER BY plate_number"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Finds vehicles at `store_id` that are Idle AND free of blocking
    /// bookings overlapping `[start, end)`.
    ///
    /// ## Why Two Conditions
    /// An Idle vehicle can still carry a future-dated Pending booking that
    /// overlaps the window; the subquery excludes it. The subquery is the
    /// same half-open overlap predicate the write path re-checks, so this
    /// search never offers a vehicle that `create_booking` would reject.
    pub async fn find_available(
        &self,
        store_id: &str,
        start: chrono::DateTime<Utc>,
        end: chrono::DateTime<Utc>,
    ) -> DbResult<Vec<Vehicle>> {
        debug!(store_id = %store_id, "Searching available vehicles");

        let vehicles = sqlx::query_as::<_, Vehicle>(&format!(
            "SELECT {VEHICLE_COLUMNS} FROM vehicles v
             WHERE v.store_id = ?1
               AND v.status = ?2
               AND v.id NOT IN (
                   SELECT b.vehicle_id FROM bookings b
                   WHERE b.status IN (?3, ?4)
                     AND b.start_time < ?5
                     AND b.end_time > ?6
               )
             ORDER BY v.plate_number"
        ))
        .bind(store_id)
        .bind(VehicleStatus::Idle)
        .bind(BookingStatus::Pending)
        .bind(BookingStatus::Active)
        .bind(end)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Sets a vehicle's status (administrative operation, e.g. marking a
    /// vehicle Transferring).
    ///
    /// Booking-lifecycle transitions (Idle ⇄ Rented) and the maintenance
    /// workflow go through the allocation engine instead, which guards them
    /// transactionally.
    pub async fn set_status(&self, id: &str, status: VehicleStatus) -> DbResult<()> {
        debug!(id = %id, ?status, "Setting vehicle status");

        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE vehicles SET status = ?2, updated_at = ?3 WHERE id = ?1",
        )
        .bind(id)
        .bind(status)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Vehicle", id));
        }

        Ok(())
    }

    /// Counts vehicles in the fleet (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vehicles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
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
    use fleet_core::Vehicle;

    async fn seeded_db() -> (Database, String, String) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.stores().create("Downtown", None, None).await.unwrap();
        let category = db.categories().create("Economy", None).await.unwrap();
        (db, store.id, category.id)
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn insert_and_lookups() {
        let (db, store_id, category_id) = seeded_db().await;
        let repo = db.vehicles();

        let vehicle = Vehicle::register(
            "B-7741",
            Some("Corsa 1.2".to_string()),
            &category_id,
            &store_id,
            9_900,
            now(),
        )
        .unwrap();
        repo.insert(&vehicle).await.unwrap();

        let by_plate = repo.get_by_plate("B-7741").await.unwrap().unwrap();
        assert_eq!(by_plate.id, vehicle.id);
        assert_eq!(by_plate.status, VehicleStatus::Idle);
        assert_eq!(by_plate.daily_rate().cents(), 9_900);

        assert_eq!(repo.list_by_store(&store_id).await.unwrap().len(), 1);
        assert_eq!(repo.list_by_category(&category_id).await.unwrap().len(), 1);
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_plate_is_rejected() {
        let (db, store_id, category_id) = seeded_db().await;
        let repo = db.vehicles();

        let first =
            Vehicle::register("B-7741", None, &category_id, &store_id, 9_900, now()).unwrap();
        repo.insert(&first).await.unwrap();

        let second =
            Vehicle::register("B-7741", None, &category_id, &store_id, 8_900, now()).unwrap();
        let err = repo.insert(&second).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn set_status_requires_existing_vehicle() {
        let (db, store_id, category_id) = seeded_db().await;
        let repo = db.vehicles();

        let vehicle =
            Vehicle::register("B-7741", None, &category_id, &store_id, 9_900, now()).unwrap();
        repo.insert(&vehicle).await.unwrap();

        repo.set_status(&vehicle.id, VehicleStatus::Transferring)
            .await
            .unwrap();
        let updated = repo.get_by_id(&vehicle.id).await.unwrap().unwrap();
        assert_eq!(updated.status, VehicleStatus::Transferring);

        let err = repo
            .set_status("missing", VehicleStatus::Idle)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
