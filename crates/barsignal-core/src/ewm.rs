//! Exponentially weighted moving average.
//!
//! `E[0] = S[0]`, `E[i] = α·S[i] + (1-α)·E[i-1]` with `α = 2 / (span + 1)`.
//! There is no warm-up gap: the output is defined from the first input.
//!
//! Missing inputs:
//! - leading NaNs stay NaN and the recurrence seeds at the first defined value;
//! - an interior NaN holds the previous output, and the next observation is
//!   blended with the decayed weight `(1-α)^(gap+1)` of the held value.
//!
//! Without NaNs both rules are inert and the plain recurrence applies.

use crate::error::{IndicatorError, Result};
use crate::num::SignalFloat;
use crate::series::Series;

/// Smoothing factor `α = 2 / (span + 1)`.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `span` is 0.
pub fn smoothing_factor<T: SignalFloat>(span: usize) -> Result<T> {
    if span == 0 {
        tracing::debug!("rejecting ewm span of 0");
        return Err(IndicatorError::InvalidWindow(0));
    }
    Ok(T::TWO / T::from_len(span + 1))
}

/// Exponentially weighted moving average with a fixed `span`.
///
/// Strictly sequential: each output depends on the one before it.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `span` is 0.
///
/// # Example
///
/// ```rust
/// use barsignal_core::ewm::ewm_mean;
///
/// let result = ewm_mean(&[1.0, 2.0, 3.0, 4.0], 3).unwrap();
/// assert_eq!(result[0], 1.0);
/// assert_eq!(result[1], 1.5); // 0.5 * 2 + 0.5 * 1
/// assert_eq!(result[2], 2.25);
/// ```
pub fn ewm_mean<T: SignalFloat>(data: &[T], span: usize) -> Result<Series<T>> {
    let alpha: T = smoothing_factor(span)?;
    let decay = T::ONE - alpha;

    let mut result = Series::with_capacity(data.len());
    let mut state: Option<T> = None;
    // Weight of the held output, decayed once per missing input.
    let mut held = T::ONE;

    for &value in data {
        let Some(previous) = state else {
            if !value.is_nan() {
                state = Some(value);
            }
            result.push(value);
            continue;
        };

        if value.is_nan() {
            held = held * decay;
            result.push(previous);
            continue;
        }

        let next = if previous == value {
            value
        } else if held == T::ONE {
            alpha * value + decay * previous
        } else {
            let weight = held * decay;
            (weight * previous + alpha * value) / (weight + alpha)
        };
        held = T::ONE;
        state = Some(next);
        result.push(next);
    }

    Ok(result)
}
