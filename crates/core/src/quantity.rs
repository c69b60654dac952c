//! Count adjustment for storefront inventory levels.

/// Clamp a reported count to what the storefront accepts: a non-negative
/// integer. `adjusted_count(c) = max(0, floor(c))`; NaN maps to 0.
pub fn adjusted_count(count: f64) -> u64 {
    if count.is_nan() || count <= 0.0 {
        return 0;
    }
    // `as` saturates at u64::MAX for out-of-range floats.
    count.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamps_and_floors() {
        assert_eq!(adjusted_count(-3.7), 0);
        assert_eq!(adjusted_count(4.2), 4);
        assert_eq!(adjusted_count(0.0), 0);
        assert_eq!(adjusted_count(7.8), 7);
        assert_eq!(adjusted_count(8.0), 8);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(adjusted_count(f64::NAN), 0);
        assert_eq!(adjusted_count(f64::NEG_INFINITY), 0);
        assert_eq!(adjusted_count(f64::INFINITY), u64::MAX);
        assert_eq!(adjusted_count(-0.0), 0);
    }

    proptest! {
        #[test]
        fn never_exceeds_input(count in -1.0e12_f64..1.0e12_f64) {
            let adjusted = adjusted_count(count);
            // Never negative by type; never above the raw count.
            prop_assert!((adjusted as f64) <= count.max(0.0));
            // Flooring: within 1 of the clamped input.
            prop_assert!(count.max(0.0) - (adjusted as f64) < 1.0);
        }
    }
}
