//! Per-bar building blocks shared by indicators.

use crate::error::{IndicatorError, Result};
use crate::num::SignalFloat;
use crate::series::Series;

/// Compute True Range.
///
/// `TR[i] = max(High - Low, |High - PrevClose|, |Low - PrevClose|)`.
/// The first bar has no previous close, so `TR[0]` is NaN.
///
/// # Errors
///
/// Returns [`IndicatorError::LengthMismatch`] if the slices differ in length.
///
/// # Example
///
/// ```rust
/// use barsignal_core::utils::true_range;
///
/// let tr = true_range(&[10.0f64, 12.0], &[8.0, 9.0], &[9.0, 11.0]).unwrap();
/// assert!(tr[0].is_nan());
/// assert_eq!(tr[1], 3.0);
/// ```
pub fn true_range<T: SignalFloat>(high: &[T], low: &[T], close: &[T]) -> Result<Series<T>> {
    for other in [low.len(), close.len()] {
        if other != high.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: high.len(),
                actual: other,
            });
        }
    }

    let mut result = Series::with_capacity(high.len());
    if high.is_empty() {
        return Ok(result);
    }

    result.push(T::NAN);
    for i in 1..high.len() {
        let prev_close = close[i - 1];
        let hl = high[i] - low[i];
        let hc = (high[i] - prev_close).abs();
        let lc = (low[i] - prev_close).abs();
        result.push(nan_max(nan_max(hl, hc), lc));
    }

    Ok(result)
}

/// Maximum that propagates NaN instead of ignoring it.
#[inline]
fn nan_max<T: SignalFloat>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::NAN
    } else if a >= b {
        a
    } else {
        b
    }
}

/// Upward part of a change: `max(x, 0)`, NaN preserved.
#[inline]
#[must_use]
pub fn gain<T: SignalFloat>(x: T) -> T {
    if x > T::ZERO {
        x
    } else if x.is_nan() {
        x
    } else {
        T::ZERO
    }
}

/// Downward part of a change as a positive number: `max(-x, 0)`, NaN preserved.
#[inline]
#[must_use]
pub fn loss<T: SignalFloat>(x: T) -> T {
    gain(-x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_range() {
        let high: [f64; 3] = [10.0, 12.0, 11.0];
        let low = [8.0, 9.0, 7.0];
        let close = [9.0, 11.0, 8.0];

        let result = true_range(&high, &low, &close).unwrap();

        assert_eq!(result.len(), 3);
        assert!(result[0].is_nan());

        // Bar 1: max(12-9, |12-9|, |9-9|) = 3
        assert_eq!(result[1], 3.0);

        // Bar 2: max(11-7, |11-11|, |7-11|) = 4
        assert_eq!(result[2], 4.0);
    }

    #[test]
    fn test_true_range_gap_up() {
        // Gap above the previous close dominates the bar's own range
        let result = true_range(&[10.0, 20.0], &[9.0, 19.0], &[9.5, 19.5]).unwrap();
        assert_eq!(result[1], 10.5);
    }

    #[test]
    fn test_true_range_length_mismatch() {
        assert!(matches!(
            true_range(&[1.0, 2.0], &[1.0], &[1.0, 2.0]),
            Err(IndicatorError::LengthMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_gain_loss() {
        assert_eq!(gain(0.5), 0.5);
        assert_eq!(gain(-0.5), 0.0);
        assert_eq!(loss(-0.75), 0.75);
        assert_eq!(loss(0.25), 0.0);
        assert!(gain(f64::NAN).is_nan());
        assert!(loss(f64::NAN).is_nan());
    }
}
