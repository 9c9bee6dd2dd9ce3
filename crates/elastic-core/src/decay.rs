//! Sigmoid decay that bounds unbounded pointer overshoot.

/// Logistic curve rescaled so that `sigmoid(0) == 0` and `sigmoid(r) -> 1`
/// as `r -> inf`.
#[inline]
pub fn sigmoid(r: f64) -> f64 {
    2.0 * (1.0 / (1.0 + (-r).exp()) - 0.5)
}

/// Map an overshoot in pixels to a visual overflow in `[0, max_overflow)`.
///
/// `displacement` is expected to be non-negative; callers take the one-sided
/// distance past the track edge before calling. A zero cap disables overflow
/// entirely.
#[inline]
pub fn decay(displacement: f64, max_overflow: f64) -> f64 {
    if max_overflow == 0.0 {
        return 0.0;
    }
    let ratio = displacement / max_overflow;
    // sigmoid saturates to exactly 1.0 in f64 for large ratios
    (sigmoid(ratio) * max_overflow).min(max_overflow * (1.0 - f64::EPSILON))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_displacement_is_zero() {
        assert_eq!(decay(0.0, 50.0), 0.0);
        assert_eq!(sigmoid(0.0), 0.0);
    }

    #[test]
    fn zero_cap_disables_overflow() {
        assert_eq!(decay(0.0, 0.0), 0.0);
        assert_eq!(decay(123.0, 0.0), 0.0);
        assert_eq!(decay(1e9, 0.0), 0.0);
    }

    #[test]
    fn cap_sized_displacement_matches_reference() {
        let d = decay(50.0, 50.0);
        assert!((d - 50.0 * 0.462_117_157).abs() < 1e-6, "got {d}");
        assert!((d - 23.1).abs() < 0.01);
    }

    #[test]
    fn large_displacement_approaches_but_stays_below_cap() {
        let d = decay(500.0, 50.0);
        assert!(d < 50.0);
        assert!(d > 49.99);
        assert!(decay(1e12, 50.0) < 50.0);
    }
}
