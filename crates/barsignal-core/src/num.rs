//! Numeric type abstraction for indicator computations.
//!
//! Every primitive and indicator is generic over [`SignalFloat`], which is
//! implemented for `f32` and `f64`. NaN is the undefined-value marker used
//! throughout the workspace.

use num_traits::{Float, FromPrimitive, ToPrimitive};

/// Serialization bounds, present only when the `serde` feature is enabled.
#[cfg(feature = "serde")]
pub trait SerdeBounds: serde::Serialize + serde::de::DeserializeOwned {}

#[cfg(feature = "serde")]
impl<T> SerdeBounds for T where T: serde::Serialize + serde::de::DeserializeOwned {}

/// Serialization bounds, present only when the `serde` feature is enabled.
#[cfg(not(feature = "serde"))]
pub trait SerdeBounds {}

#[cfg(not(feature = "serde"))]
impl<T> SerdeBounds for T {}

/// Floating-point type used for prices and indicator values.
///
/// # Example
///
/// ```rust
/// use barsignal_core::SignalFloat;
///
/// fn rsi_from_rs<T: SignalFloat>(rs: T) -> T {
///     T::HUNDRED - T::HUNDRED / (T::ONE + rs)
/// }
///
/// assert_eq!(rsi_from_rs(f64::INFINITY), 100.0);
/// assert!(rsi_from_rs(f64::NAN).is_nan());
/// ```
pub trait SignalFloat:
    Float + FromPrimitive + ToPrimitive + Copy + Send + Sync + Default + SerdeBounds + 'static
{
    /// Not-a-number, the undefined-value marker.
    const NAN: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// Two.
    const TWO: Self;
    /// One hundred, the scale of every oscillator in this workspace.
    const HUNDRED: Self;

    /// Convert from `usize` (window lengths, offsets).
    #[must_use]
    fn from_len(value: usize) -> Self;

    /// Convert from `f64`, rounding if the target is narrower.
    #[must_use]
    fn from_f64_lossy(value: f64) -> Self;

    /// Convert to `f64`.
    #[must_use]
    fn to_f64_lossy(self) -> f64;
}

impl SignalFloat for f32 {
    const NAN: Self = f32::NAN;
    const INFINITY: Self = f32::INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_len(value: usize) -> Self {
        value as f32
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        f64::from(self)
    }
}

impl SignalFloat for f64 {
    const NAN: Self = f64::NAN;
    const INFINITY: Self = f64::INFINITY;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn from_len(value: usize) -> Self {
        value as f64
    }

    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}
