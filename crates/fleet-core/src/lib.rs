//! # fleet-core: Pure Business Logic for Fleet Rental
//!
//! This crate is the **heart** of Fleet Rental. It contains all business
//! logic as pure functions and types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Fleet Rental Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │          Outer surfaces (HTTP API, admin CLI - external)    │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │                fleet-db (allocation engine + storage)       │   │
//! │  └─────────────────────────────┬───────────────────────────────┘   │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐   │
//! │  │               ★ fleet-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────────────┐   │   │
//! │  │   │  types  │ │  money  │ │ pricing  │ │   interval    │   │   │
//! │  │   │ Vehicle │ │  Money  │ │  totals  │ │ half-open     │   │   │
//! │  │   │ Booking │ │  cents  │ │ deposits │ │ overlap/days  │   │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └───────────────┘   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Vehicle, Booking, LedgerEntry, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Rental total, deposit and overdue penalty rules
//! - [`interval`] - Half-open intervals and the overlap predicate
//! - [`clock`] - Injected time source for deterministic tests
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input =
//!    same output (time itself arrives through [`clock::Clock`])
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod clock;
pub mod error;
pub mod interval;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fleet_core::Money` instead of
// `use fleet_core::money::Money`

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, ValidationError};
pub use interval::Interval;
pub use money::Money;
pub use types::*;
