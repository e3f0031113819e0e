//! Share rounding shared by the validator and the engine

/// Round an amount to the nearest whole number of shares, in euros
///
/// Ties go to the even share count, so 5125 at 250 per share (20.5 shares)
/// rounds to 5000.
pub fn round_to_unit_multiple(amount: f64, price_per_share: f64) -> f64 {
    (amount / price_per_share).round_ties_even() * price_per_share
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_multiple_unchanged() {
        assert_eq!(round_to_unit_multiple(5000.0, 250.0), 5000.0);
        assert_eq!(round_to_unit_multiple(6100.0, 610.0), 6100.0);
    }

    #[test]
    fn test_half_share_rounds_to_even() {
        assert_eq!(round_to_unit_multiple(5125.0, 250.0), 5000.0);
        assert_eq!(round_to_unit_multiple(5375.0, 250.0), 5500.0);
    }

    #[test]
    fn test_rounding_is_idempotent() {
        for amount in [5000.0, 5100.0, 5125.0, 5130.0, 6405.0, 12_345.67] {
            let once = round_to_unit_multiple(amount, 250.0);
            assert_eq!(round_to_unit_multiple(once, 250.0), once);
        }
    }
}
