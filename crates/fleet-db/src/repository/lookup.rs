//! # Lookup Repositories
//!
//! Thin data access for stores, categories and renters.
//!
//! These are the identity/lookup collaborators of the allocation engine:
//! the engine resolves ids through them before a transition but never
//! traverses object graphs. Plain CRUD, no business rules.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use fleet_core::{Category, Renter, Store};

// =============================================================================
// Stores
// =============================================================================

/// Repository for store records.
#[derive(Debug, Clone)]
pub struct StoreRepository {
    pool: SqlitePool,
}

impl StoreRepository {
    pub fn new(pool: SqlitePool) -> Self {
        StoreRepository { pool }
    }

    /// Gets a store by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Store>> {
        let store = sqlx::query_as::<_, Store>(
            "SELECT id, name, address, phone, created_at, updated_at
             FROM stores WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    /// Lists all stores, by name.
    pub async fn list(&self) -> DbResult<Vec<Store>> {
        let stores = sqlx::query_as::<_, Store>(
            "SELECT id, name, address, phone, created_at, updated_at
             FROM stores ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stores)
    }

    /// Creates a store.
    pub async fn create(
        &self,
        name: &str,
        address: Option<&str>,
        phone: Option<&str>,
    ) -> DbResult<Store> {
        let now = Utc::now();
        let store = Store {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            address: address.map(str::to_string),
            phone: phone.map(str::to_string),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO stores (id, name, address, phone, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&store.id)
        .bind(&store.name)
        .bind(&store.address)
        .bind(&store.phone)
        .bind(store.created_at)
        .bind(store.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(store)
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Repository for vehicle category records.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Gets a category by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at, updated_at
             FROM categories WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    /// Lists all categories, by name.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at, updated_at
             FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Creates a category.
    pub async fn create(&self, name: &str, description: Option<&str>) -> DbResult<Category> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO categories (id, name, description, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.description)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(category)
    }
}

// =============================================================================
// Renters
// =============================================================================

/// Repository for renter records.
#[derive(Debug, Clone)]
pub struct RenterRepository {
    pool: SqlitePool,
}

impl RenterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        RenterRepository { pool }
    }

    /// Gets a renter by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Renter>> {
        let renter = sqlx::query_as::<_, Renter>(
            "SELECT id, name, phone, created_at, updated_at
             FROM renters WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(renter)
    }

    /// Lists all renters, by name.
    pub async fn list(&self) -> DbResult<Vec<Renter>> {
        let renters = sqlx::query_as::<_, Renter>(
            "SELECT id, name, phone, created_at, updated_at
             FROM renters ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(renters)
    }

    /// Creates a renter.
    pub async fn create(&self, name: &str, phone: Option<&str>) -> DbResult<Renter> {
        let now = Utc::now();
        let renter = Renter {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: phone.map(str::to_string),
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            "INSERT INTO renters (id, name, phone, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&renter.id)
        .bind(&renter.name)
        .bind(&renter.phone)
        .bind(renter.created_at)
        .bind(renter.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(renter)
    }

    /// Deletes a renter (administrative cleanup; fails while bookings
    /// reference them).
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM renters WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Renter", id));
        }

        Ok(())
    }
}
