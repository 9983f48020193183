//! # Pricing Module
//!
//! Pure functions computing the monetary consequences of the booking
//! lifecycle: rental total, deposit, overdue penalty.
//!
//! ## Where Pricing Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  create_booking                                                     │
//! │      └── rental_total(rate, start, end)    → booking amount         │
//! │      └── deposit_amount(rate)              → Deposit ledger entry   │
//! │                                                                     │
//! │  complete_booking                                                   │
//! │      └── overdue_penalty(rate, end, now)   → added to the amount,   │
//! │                                              Penalty ledger entry   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions are side-effect free and operate on integer cents. The
//! minimum billable unit is one day: any partial day rounds up.

use chrono::{DateTime, Utc};

use crate::interval::ceil_days;
use crate::money::Money;

// =============================================================================
// Policy Constants
// =============================================================================

/// Overdue surcharge rate: 1.5× the daily rate, in basis points.
pub const OVERDUE_RATE_BPS: u32 = 15_000;

/// Deposit charged at booking creation, in daily rates.
pub const DEPOSIT_DAYS: i64 = 3;

// =============================================================================
// Pricing Functions
// =============================================================================

/// Billable days for a rental window: whole days, partial days round up,
/// minimum one day.
#[inline]
pub fn billable_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    ceil_days(start, end).max(1)
}

/// Rental total: `daily_rate × billable_days`.
///
/// Monotonically non-decreasing in the window length and never below one
/// daily rate.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use fleet_core::money::Money;
/// use fleet_core::pricing::rental_total;
///
/// let rate = Money::from_cents(10_000); // $100.00/day
/// let start = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
///
/// assert_eq!(rental_total(rate, start, end).cents(), 20_000); // 2 days
/// ```
pub fn rental_total(daily_rate: Money, start: DateTime<Utc>, end: DateTime<Utc>) -> Money {
    daily_rate.multiply_days(billable_days(start, end))
}

/// Deposit collected at booking creation: `daily_rate × 3`.
#[inline]
pub fn deposit_amount(daily_rate: Money) -> Money {
    daily_rate.multiply_days(DEPOSIT_DAYS)
}

/// Days a return ran over its scheduled end: zero when on time, otherwise
/// whole days with partial days rounded up, minimum one day.
pub fn overdue_days(scheduled_end: DateTime<Utc>, actual_end: DateTime<Utc>) -> i64 {
    if actual_end <= scheduled_end {
        return 0;
    }
    ceil_days(scheduled_end, actual_end).max(1)
}

/// Overdue penalty: `daily_rate × overdue_days × 1.5`, zero for an on-time
/// return.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use fleet_core::money::Money;
/// use fleet_core::pricing::overdue_penalty;
///
/// let rate = Money::from_cents(10_000); // $100.00/day
/// let scheduled = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
/// let actual = Utc.with_ymd_and_hms(2026, 8, 4, 15, 0, 0).unwrap();
///
/// // 29 hours late → 2 overdue days → 100 × 2 × 1.5 = $300.00
/// assert_eq!(overdue_penalty(rate, scheduled, actual).cents(), 30_000);
/// ```
pub fn overdue_penalty(
    daily_rate: Money,
    scheduled_end: DateTime<Utc>,
    actual_end: DateTime<Utc>,
) -> Money {
    let days = overdue_days(scheduled_end, actual_end);
    if days == 0 {
        return Money::zero();
    }
    daily_rate.multiply_days(days).apply_rate_bps(OVERDUE_RATE_BPS)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_rental_total_whole_days() {
        let rate = Money::from_cents(10_000);
        assert_eq!(rental_total(rate, at(1, 10), at(3, 10)).cents(), 20_000);
    }

    #[test]
    fn test_rental_total_minimum_one_day() {
        let rate = Money::from_cents(10_000);
        // 12 hours still bills one full day
        assert_eq!(rental_total(rate, at(1, 0), at(1, 12)).cents(), 10_000);
    }

    #[test]
    fn test_rental_total_partial_day_rounds_up() {
        let rate = Money::from_cents(10_000);
        // 2 days + 5 hours bills 3 days
        assert_eq!(rental_total(rate, at(1, 10), at(3, 15)).cents(), 30_000);
    }

    #[test]
    fn test_rental_total_monotonic_and_bounded_below() {
        let rate = Money::from_cents(7_500);
        let start = at(1, 10);
        let mut prev = Money::zero();
        for hours in 1..96u32 {
            let end = start + chrono::Duration::hours(hours as i64);
            let total = rental_total(rate, start, end);
            assert!(total >= rate, "total below one daily rate at {hours}h");
            assert!(total >= prev, "total decreased at {hours}h");
            prev = total;
        }
    }

    #[test]
    fn test_deposit_is_three_daily_rates() {
        assert_eq!(deposit_amount(Money::from_cents(10_000)).cents(), 30_000);
    }

    #[test]
    fn test_no_penalty_on_time() {
        let rate = Money::from_cents(10_000);
        assert!(overdue_penalty(rate, at(3, 10), at(3, 10)).is_zero());
        assert!(overdue_penalty(rate, at(3, 10), at(2, 10)).is_zero());
    }

    #[test]
    fn test_penalty_rounds_days_up() {
        let rate = Money::from_cents(10_000);
        // 29 hours late → 2 days → 100 × 2 × 1.5 = 300
        assert_eq!(overdue_penalty(rate, at(3, 10), at(4, 15)).cents(), 30_000);
        // 1 minute late → 1 day → 150
        let barely = at(3, 10) + chrono::Duration::minutes(1);
        assert_eq!(overdue_penalty(rate, at(3, 10), barely).cents(), 15_000);
    }
}
