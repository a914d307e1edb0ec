//! Rolling-window primitives.
//!
//! Every function maps a slice of length `n` to a [`Series`] of length `n`.
//! Position `i` is defined only when `i >= window - 1`; earlier positions are
//! NaN. A window that contains a NaN yields NaN.
//!
//! Window policy: `window == 0` is a configuration error
//! ([`IndicatorError::InvalidWindow`]). A window longer than the input is not
//! an error; the output is NaN everywhere.

use crate::error::{IndicatorError, Result};
use crate::num::SignalFloat;
use crate::series::Series;
use crate::window::{ExtremaWindow, Extreme};

/// Validate a window size against an input of `len` values.
///
/// Returns `Ok(false)` when the window is longer than the input, in which case
/// the caller should return an all-NaN series.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
pub fn check_window(window: usize, len: usize) -> Result<bool> {
    if window == 0 {
        tracing::debug!("rejecting rolling window of 0");
        return Err(IndicatorError::InvalidWindow(0));
    }
    if window > len {
        tracing::trace!(window, len, "window exceeds input, output is all NaN");
        return Ok(false);
    }
    Ok(true)
}

/// Rolling arithmetic mean.
///
/// Each window is summed directly from its own values, so a window of zeros
/// averages to exactly 0 and a window of non-negative values never goes
/// negative. NaN and infinity obey IEEE rules and only affect the windows holding them.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
///
/// # Example
///
/// ```rust
/// use barsignal_core::rolling::rolling_mean;
///
/// let result = rolling_mean(&[1.0f64, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
/// assert!(result[0].is_nan());
/// assert!(result[1].is_nan());
/// assert_eq!(result[2], 2.0);
/// assert_eq!(result[4], 4.0);
///
/// // Zeros after non-zero values average to exactly 0
/// let flat = rolling_mean(&[0.1, 0.2, 0.0, 0.0], 2).unwrap();
/// assert_eq!(flat[3], 0.0);
/// ```
pub fn rolling_mean<T: SignalFloat>(data: &[T], window: usize) -> Result<Series<T>> {
    if !check_window(window, data.len())? {
        return Ok(Series::nan(data.len()));
    }

    let n = T::from_len(window);
    let mut result = Series::with_capacity(data.len());
    for _ in 1..window {
        result.push(T::NAN);
    }
    for values in data.windows(window) {
        let sum = values.iter().fold(T::ZERO, |acc, &x| acc + x);
        result.push(sum / n);
    }

    Ok(result)
}

/// Rolling variance with `ddof` delta degrees of freedom.
///
/// Two-pass per window: the window mean first, then the squared deviations
/// divided by `window - ddof`. With `window == ddof` the divisor is zero and
/// the result is NaN.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
pub fn rolling_variance<T: SignalFloat>(
    data: &[T],
    window: usize,
    ddof: usize,
) -> Result<Series<T>> {
    let means = rolling_mean(data, window)?;
    let mut result = Series::with_capacity(data.len());
    let divisor = T::from_len(window.saturating_sub(ddof));

    for i in 0..data.len() {
        if i + 1 < window {
            result.push(T::NAN);
            continue;
        }
        let mean = means[i];
        let sum_sq = data[i + 1 - window..=i].iter().fold(T::ZERO, |acc, &x| {
            let diff = x - mean;
            acc + diff * diff
        });
        result.push(sum_sq / divisor);
    }

    Ok(result)
}

/// Rolling sample standard deviation (divides by `window - 1`).
///
/// Bollinger Bands consume this, so band width follows the sample convention.
/// A window of 1 yields NaN everywhere.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
pub fn rolling_std<T: SignalFloat>(data: &[T], window: usize) -> Result<Series<T>> {
    Ok(rolling_variance(data, window, 1)?.map(|x| x.sqrt()))
}

fn rolling_extreme<T, F>(data: &[T], window: usize, extreme: Extreme, emit: F) -> Result<Series<T>>
where
    T: SignalFloat,
    F: Fn(usize, usize, T) -> T,
{
    if !check_window(window, data.len())? {
        return Ok(Series::nan(data.len()));
    }

    let mut tracker = ExtremaWindow::new(window, extreme);
    let mut result = Series::with_capacity(data.len());

    for (i, &value) in data.iter().enumerate() {
        tracker.push(i, value);
        if i + 1 < window {
            result.push(T::NAN);
            continue;
        }
        match tracker.current(i) {
            Some((at, extreme_value)) => result.push(emit(i + 1 - window, at, extreme_value)),
            None => result.push(T::NAN),
        }
    }

    Ok(result)
}

/// Rolling maximum.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
pub fn rolling_max<T: SignalFloat>(data: &[T], window: usize) -> Result<Series<T>> {
    rolling_extreme(data, window, Extreme::Max, |_, _, value| value)
}

/// Rolling minimum.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
pub fn rolling_min<T: SignalFloat>(data: &[T], window: usize) -> Result<Series<T>> {
    rolling_extreme(data, window, Extreme::Min, |_, _, value| value)
}

/// Offset of the rolling maximum from the start of its window.
///
/// Offset 0 is the oldest bar of the window, `window - 1` the newest. Ties
/// report the earliest occurrence.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
///
/// # Example
///
/// ```rust
/// use barsignal_core::rolling::rolling_argmax;
///
/// let offsets = rolling_argmax(&[10.0, 12.0, 15.0, 14.0], 3).unwrap();
/// assert_eq!(offsets[2], 2.0);
/// assert_eq!(offsets[3], 1.0);
/// ```
pub fn rolling_argmax<T: SignalFloat>(data: &[T], window: usize) -> Result<Series<T>> {
    rolling_extreme(data, window, Extreme::Max, |start, at, _| {
        T::from_len(at - start)
    })
}

/// Offset of the rolling minimum from the start of its window.
///
/// Same offset and tie conventions as [`rolling_argmax`].
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] if `window` is 0.
pub fn rolling_argmin<T: SignalFloat>(data: &[T], window: usize) -> Result<Series<T>> {
    rolling_extreme(data, window, Extreme::Min, |start, at, _| {
        T::from_len(at - start)
    })
}
