//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A daily rate of $99.99 over 30 days must come out to exactly      │
//! │  $2,999.70, not $2,999.6999999999998.                              │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    9999 cents × 30 = 299_970 cents, exactly                        │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fleet_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(9999); // $99.99 per day
//!
//! // Arithmetic operations
//! let three_days = rate * 3;                  // $299.97
//! let with_fee = rate + Money::from_cents(500); // $104.99
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the system flows through this type: daily rates,
/// rental totals, deposits, penalties and ledger amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let rate = Money::from_cents(9999); // Represents $99.99
    /// assert_eq!(rate.cents(), 9999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -$5.50, not -$4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Applies a rate expressed in basis points, rounding half up.
    ///
    /// ## Why Basis Points?
    /// 1 basis point = 0.01% = 1/10000. Policy multipliers like the 1.5×
    /// overdue surcharge are stored as integers (15_000 bps) so the
    /// arithmetic never touches floating point.
    ///
    /// ## Implementation
    /// Integer math with i128 widening: `(cents × bps + 5000) / 10000`.
    /// The +5000 rounds the half-cent boundary up, which is the rounding
    /// rule for all derived amounts in this system.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let rate = Money::from_cents(10_000); // $100.00
    /// let penalty_per_day = rate.apply_rate_bps(15_000); // 150%
    /// assert_eq!(penalty_per_day.cents(), 15_000); // $150.00
    /// ```
    pub fn apply_rate_bps(&self, rate_bps: u32) -> Money {
        let cents = (self.0 as i128 * rate_bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Multiplies money by a whole-day count.
    ///
    /// ## Example
    /// ```rust
    /// use fleet_core::money::Money;
    ///
    /// let rate = Money::from_cents(10_000); // $100.00/day
    /// assert_eq!(rate.multiply_days(3).cents(), 30_000);
    /// ```
    #[inline]
    pub const fn multiply_days(&self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Outer surfaces format for display
/// themselves to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for day counts).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i32) -> Self {
        Money(self.0 * days as i64)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, days: i64) -> Self {
        Money(self.0 * days)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(9999);
        assert_eq!(money.cents(), 9999);
        assert_eq!(money.dollars(), 99);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(99, 99);
        assert_eq!(money.cents(), 9999);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(9999)), "$99.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_apply_rate_bps_exact() {
        // $100.00 at 150% = $150.00
        let rate = Money::from_cents(10_000);
        assert_eq!(rate.apply_rate_bps(15_000).cents(), 15_000);
    }

    #[test]
    fn test_apply_rate_bps_rounds_half_up() {
        // 33 cents at 150% = 49.5 cents → 50 cents
        let amount = Money::from_cents(33);
        assert_eq!(amount.apply_rate_bps(15_000).cents(), 50);

        // 21 cents at 150% = 31.5 cents → 32 cents
        let amount = Money::from_cents(21);
        assert_eq!(amount.apply_rate_bps(15_000).cents(), 32);
    }

    #[test]
    fn test_multiply_days() {
        let rate = Money::from_cents(9999);
        assert_eq!(rate.multiply_days(30).cents(), 299_970);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }
}
