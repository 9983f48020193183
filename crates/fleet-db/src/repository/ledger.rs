//! # Ledger Repository
//!
//! Monetary events tied to bookings: deposits, finals, penalties.
//!
//! ## Best-Effort Bookkeeping
//! The ledger records what the allocation lifecycle decided; it is not a
//! settlement gate. The engine writes entries AFTER committing a booking
//! transition and logs (rather than propagates) a failure here, so a ledger
//! outage can never roll back a return.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use fleet_core::{LedgerCategory, LedgerEntry, Money};

/// Repository for ledger database operations.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: SqlitePool,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LedgerRepository { pool }
    }

    /// Records a monetary event against a booking.
    ///
    /// Entry amounts are never negative; the category is immutable once
    /// written (there is no update operation on this table).
    pub async fn record(
        &self,
        booking_id: &str,
        amount: Money,
        category: LedgerCategory,
        recorded_at: DateTime<Utc>,
    ) -> DbResult<LedgerEntry> {
        if amount.is_negative() {
            return Err(DbError::QueryFailed(
                "ledger entry amount must be non-negative".to_string(),
            ));
        }

        let entry = LedgerEntry {
            id: Uuid::new_v4().to_string(),
            booking_id: booking_id.to_string(),
            amount_cents: amount.cents(),
            category,
            recorded_at,
        };

        debug!(booking_id = %booking_id, amount = %amount, ?category, "Recording ledger entry");

        sqlx::query(
            "INSERT INTO ledger_entries (id, booking_id, amount_cents, category, recorded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&entry.id)
        .bind(&entry.booking_id)
        .bind(entry.amount_cents)
        .bind(entry.category)
        .bind(entry.recorded_at)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Lists all entries for a booking, oldest first.
    pub async fn list_for_booking(&self, booking_id: &str) -> DbResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(
            "SELECT id, booking_id, amount_cents, category, recorded_at
             FROM ledger_entries
             WHERE booking_id = ?1
             ORDER BY recorded_at",
        )
        .bind(booking_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Sums all entries of a category for a booking (for reconciliation).
    pub async fn total_for_booking(
        &self,
        booking_id: &str,
        category: LedgerCategory,
    ) -> DbResult<Money> {
        let total: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(amount_cents) FROM ledger_entries
             WHERE booking_id = ?1 AND category = ?2",
        )
        .bind(booking_id)
        .bind(category)
        .fetch_one(&self.pool)
        .await?;

        Ok(Money::from_cents(total.unwrap_or(0)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
