//! # fleet-db: Storage Layer & Allocation Engine for Fleet Rental
//!
//! This crate provides database access for Fleet Rental and hosts the
//! allocation engine. It uses SQLite for storage with sqlx for async
//! operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Fleet Rental Data Flow                         │
//! │                                                                     │
//! │  Request handler (HTTP/CLI, external)                               │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                    fleet-db (THIS CRATE)                    │   │
//! │  │                                                             │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌─────────────┐  │   │
//! │  │   │  Allocation   │   │  Repositories │   │  Migrations │  │   │
//! │  │   │    Engine     │──►│ (vehicle,     │   │  (embedded) │  │   │
//! │  │   │ (transactions)│   │  booking, ...)│   │             │  │   │
//! │  │   └───────┬───────┘   └───────┬───────┘   └─────────────┘  │   │
//! │  │           │                   │                             │   │
//! │  │           ▼                   ▼                             │   │
//! │  │   ┌─────────────────────────────────────┐                  │   │
//! │  │   │       Database (pool.rs)            │                  │   │
//! │  │   │  SqlitePool • WAL • busy timeout    │                  │   │
//! │  │   └─────────────────────────────────────┘                  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (vehicle, booking, ...)
//! - [`allocation`] - The allocation engine (create/pickup/return/cancel)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fleet_db::{AllocationEngine, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/fleet.db")).await?;
//! let engine = AllocationEngine::with_system_clock(&db);
//!
//! let booking = engine.create_booking(&request).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use allocation::{AllocationEngine, BookingRequest, EngineError, ErrorKind};
pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::booking::BookingRepository;
pub use repository::ledger::LedgerRepository;
pub use repository::lookup::{CategoryRepository, RenterRepository, StoreRepository};
pub use repository::maintenance::MaintenanceRepository;
pub use repository::vehicle::VehicleRepository;
