//! Projection timeline
//!
//! Projections run over a horizon of 1-indexed months. Calendar behavior
//! (seasonality) repeats with a 12-month period regardless of how long the
//! horizon is, and the final year of an uneven horizon is short.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Number of months in one projection year
pub const MONTHS_PER_YEAR: usize = 12;

/// Default projection horizon (five years)
pub const DEFAULT_HORIZON_MONTHS: usize = 60;

/// Describes the span of months a projection covers
///
/// # Example
/// ```
/// use cost_projection_core_rs::Timeline;
///
/// let timeline = Timeline::new(60);
/// assert_eq!(timeline.horizon_months(), 60);
/// assert_eq!(timeline.num_years(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Number of months covered, starting at month 1
    horizon_months: usize,
}

impl Timeline {
    /// Create a timeline spanning `horizon_months` months
    ///
    /// # Panics
    /// Panics if `horizon_months` is zero. A projection over no months is
    /// a caller bug, not an input error.
    pub fn new(horizon_months: usize) -> Self {
        assert!(horizon_months > 0, "horizon_months must be positive");
        Self { horizon_months }
    }

    /// Get the number of months in the horizon
    pub fn horizon_months(&self) -> usize {
        self.horizon_months
    }

    /// Iterate the 1-indexed months of the horizon
    ///
    /// # Example
    /// ```
    /// use cost_projection_core_rs::Timeline;
    ///
    /// let timeline = Timeline::new(3);
    /// let months: Vec<usize> = timeline.months().collect();
    /// assert_eq!(months, vec![1, 2, 3]);
    /// ```
    pub fn months(&self) -> RangeInclusive<usize> {
        1..=self.horizon_months
    }

    /// Number of projection years, counting a trailing partial year
    ///
    /// # Example
    /// ```
    /// use cost_projection_core_rs::Timeline;
    ///
    /// assert_eq!(Timeline::new(24).num_years(), 2);
    /// assert_eq!(Timeline::new(25).num_years(), 3);
    /// ```
    pub fn num_years(&self) -> usize {
        self.horizon_months.div_ceil(MONTHS_PER_YEAR)
    }

    /// Calendar month (1-12) for a 1-indexed projection month
    ///
    /// Month 1 maps to January, month 13 wraps back to January.
    pub fn calendar_month(month: usize) -> usize {
        assert!(month > 0, "projection months are 1-indexed");
        (month - 1) % MONTHS_PER_YEAR + 1
    }

    /// Projection year (1-indexed) containing a 1-indexed month
    pub fn year_of(month: usize) -> usize {
        assert!(month > 0, "projection months are 1-indexed");
        (month - 1) / MONTHS_PER_YEAR + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "horizon_months must be positive")]
    fn test_zero_horizon_panics() {
        Timeline::new(0);
    }

    #[test]
    fn test_calendar_month_wraps() {
        assert_eq!(Timeline::calendar_month(1), 1);
        assert_eq!(Timeline::calendar_month(12), 12);
        assert_eq!(Timeline::calendar_month(13), 1);
        assert_eq!(Timeline::calendar_month(60), 12);
    }

    #[test]
    fn test_year_of() {
        assert_eq!(Timeline::year_of(1), 1);
        assert_eq!(Timeline::year_of(12), 1);
        assert_eq!(Timeline::year_of(13), 2);
        assert_eq!(Timeline::year_of(60), 5);
    }

    #[test]
    fn test_num_years_partial() {
        assert_eq!(Timeline::new(1).num_years(), 1);
        assert_eq!(Timeline::new(12).num_years(), 1);
        assert_eq!(Timeline::new(14).num_years(), 2);
        assert_eq!(Timeline::new(60).num_years(), 5);
    }
}
