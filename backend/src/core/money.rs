//! Money rounding for display values
//!
//! All intermediate arithmetic runs at full f64 precision. Dollar amounts
//! are rounded to cents only when they are written onto an output struct,
//! and unit counts are rounded to whole numbers at the same point.
//! Rounding any earlier would compound error across a 60-month horizon.

/// Round a dollar amount to two decimal places (cents)
///
/// # Example
/// ```
/// use cost_projection_core_rs::round_to_cents;
///
/// assert_eq!(round_to_cents(53.16749), 53.17);
/// assert_eq!(round_to_cents(0.004), 0.0);
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Round a fractional unit count to a whole number for display
///
/// Counts fed into cost arithmetic stay fractional; only the reported
/// figures pass through here.
pub fn round_count(count: f64) -> u64 {
    count.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents_half_up() {
        // 0.125 * 100 is exactly 12.5 in binary, so this exercises the
        // half-away-from-zero case without representation noise
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(1.006), 1.01);
        assert_eq!(round_to_cents(1.004), 1.0);
    }

    #[test]
    fn test_round_to_cents_exact_values_unchanged() {
        assert_eq!(round_to_cents(50.1), 50.1);
        assert_eq!(round_to_cents(0.0), 0.0);
    }

    #[test]
    fn test_round_count() {
        assert_eq!(round_count(2450.0), 2450);
        assert_eq!(round_count(1499.5), 1500);
        assert_eq!(round_count(0.4), 0);
    }
}
