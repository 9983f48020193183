//! # Repository Module
//!
//! Database repository implementations for Fleet Rental.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                     │
//! │                                                                     │
//! │  The Repository pattern abstracts database access behind a clean   │
//! │  API.                                                               │
//! │                                                                     │
//! │  Caller                                                             │
//! │       │  db.vehicles().find_available(store, start, end)            │
//! │       ▼                                                             │
//! │  VehicleRepository                                                  │
//! │  ├── get_by_id(&self, id)                                           │
//! │  ├── find_available(&self, store, start, end)                       │
//! │  └── insert(&self, vehicle)                                         │
//! │       │  SQL Query                                                  │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Repositories serve reads and simple administrative writes. The     │
//! │  check-then-write booking transitions are owned by the allocation   │
//! │  engine, which opens its own transactions and reuses                │
//! │  booking::find_conflicts inside them.                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`vehicle::VehicleRepository`] - Fleet CRUD and availability search
//! - [`booking::BookingRepository`] - Booking queries and the conflict index
//! - [`ledger::LedgerRepository`] - Monetary event bookkeeping
//! - [`lookup`] - Stores, categories, renters
//! - [`maintenance::MaintenanceRepository`] - Maintenance record queries

pub mod booking;
pub mod ledger;
pub mod lookup;
pub mod maintenance;
pub mod vehicle;
