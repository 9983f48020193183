//! # Interval Math
//!
//! Half-open time intervals and the overlap predicate used for conflict
//! detection.
//!
//! ## The Overlap Predicate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Two half-open intervals [s1, e1) and [s2, e2) conflict iff         │
//! │                                                                     │
//! │      s1 < e2  AND  s2 < e1                                          │
//! │                                                                     │
//! │  A booking ending exactly when another starts does NOT conflict:    │
//! │                                                                     │
//! │      [Mon 10:00 ────────── Wed 10:00)                               │
//! │                            [Wed 10:00 ────────── Fri 10:00)  ✓ OK   │
//! │                                                                     │
//! │      [Mon 10:00 ────────── Wed 10:00)                               │
//! │                 [Tue 00:00 ── Tue 12:00)                  ✗ CONFLICT │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The SQL conflict query in the storage layer is a direct translation of
//! this predicate; this module is the single in-process definition of it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Seconds in one billing day.
pub const SECONDS_PER_DAY: i64 = 86_400;

// =============================================================================
// Interval
// =============================================================================

/// A validated half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Creates an interval, rejecting empty or inverted windows.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use fleet_core::interval::Interval;
    ///
    /// let start = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
    ///
    /// assert!(Interval::new(start, end).is_ok());
    /// assert!(Interval::new(end, start).is_err());
    /// assert!(Interval::new(start, start).is_err());
    /// ```
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::EmptyWindow);
        }
        Ok(Interval { start, end })
    }

    #[inline]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The half-open overlap predicate.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Exact duration of the interval.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

// =============================================================================
// Day Arithmetic
// =============================================================================

/// Number of whole days from `from` to `to`, rounding any partial day up.
///
/// Returns 0 when `to` is at or before `from`. Billing minimums (at least
/// one day) are applied by the pricing layer, not here.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use fleet_core::interval::ceil_days;
///
/// let from = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
///
/// // Exactly two days
/// let to = Utc.with_ymd_and_hms(2026, 8, 3, 10, 0, 0).unwrap();
/// assert_eq!(ceil_days(from, to), 2);
///
/// // 1 day + 5 hours rounds up to 2
/// let to = Utc.with_ymd_and_hms(2026, 8, 2, 15, 0, 0).unwrap();
/// assert_eq!(ceil_days(from, to), 2);
/// ```
pub fn ceil_days(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let seconds = (to - from).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
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
    fn test_rejects_empty_and_inverted() {
        assert!(Interval::new(at(1, 10), at(1, 10)).is_err());
        assert!(Interval::new(at(2, 10), at(1, 10)).is_err());
        assert!(Interval::new(at(1, 10), at(1, 11)).is_ok());
    }

    #[test]
    fn test_overlap_is_half_open() {
        let first = Interval::new(at(1, 10), at(3, 10)).unwrap();

        // Back-to-back: ends exactly when the next starts
        let adjacent = Interval::new(at(3, 10), at(5, 10)).unwrap();
        assert!(!first.overlaps(&adjacent));
        assert!(!adjacent.overlaps(&first));

        // Nested inside
        let nested = Interval::new(at(2, 0), at(2, 12)).unwrap();
        assert!(first.overlaps(&nested));
        assert!(nested.overlaps(&first));

        // Straddling the start
        let straddle = Interval::new(at(1, 0), at(1, 12)).unwrap();
        assert!(first.overlaps(&straddle));

        // Fully before
        let before = Interval::new(at(1, 0), at(1, 9)).unwrap();
        assert!(!first.overlaps(&before));
    }

    #[test]
    fn test_ceil_days_exact() {
        assert_eq!(ceil_days(at(1, 10), at(3, 10)), 2);
        assert_eq!(ceil_days(at(1, 10), at(2, 10)), 1);
    }

    #[test]
    fn test_ceil_days_partial_rounds_up() {
        assert_eq!(ceil_days(at(1, 10), at(1, 22)), 1);
        assert_eq!(ceil_days(at(1, 10), at(2, 15)), 2);
        // 2 days + 5 hours → 3
        assert_eq!(ceil_days(at(1, 10), at(3, 15)), 3);
    }

    #[test]
    fn test_ceil_days_non_positive() {
        assert_eq!(ceil_days(at(2, 10), at(2, 10)), 0);
        assert_eq!(ceil_days(at(2, 10), at(1, 10)), 0);
    }
}
