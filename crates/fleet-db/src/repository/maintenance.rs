//! # Maintenance Repository
//!
//! Read access to maintenance records.
//!
//! Opening and closing records are status transitions on the vehicle and
//! therefore live on the allocation engine, which guards them with the same
//! transactional discipline as bookings: a vehicle can only enter
//! maintenance from Idle, so an active booking and an open maintenance
//! record can never hold the same vehicle.

use sqlx::SqlitePool;

use crate::error::DbResult;
use fleet_core::MaintenanceRecord;

/// Column list shared by every maintenance SELECT.
pub(crate) const MAINTENANCE_COLUMNS: &str =
    "id, vehicle_id, kind, start_date, end_date, cost_cents, notes, created_at, updated_at";

/// Repository for maintenance record queries.
#[derive(Debug, Clone)]
pub struct MaintenanceRepository {
    pool: SqlitePool,
}

impl MaintenanceRepository {
    /// Creates a new MaintenanceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MaintenanceRepository { pool }
    }

    /// Gets a maintenance record by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<MaintenanceRecord>> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Lists all maintenance records of a vehicle, newest first.
    pub async fn list_for_vehicle(&self, vehicle_id: &str) -> DbResult<Vec<MaintenanceRecord>> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records \
             WHERE vehicle_id = ?1 ORDER BY created_at DESC"
        ))
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Lists records still open (no end date), oldest first.
    pub async fn list_open(&self) -> DbResult<Vec<MaintenanceRecord>> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records \
             WHERE end_date IS NULL ORDER BY start_date"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
