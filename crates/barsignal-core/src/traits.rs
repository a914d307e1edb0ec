//! Core trait definitions for indicators and their outputs.

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Serialize};

use crate::bar::BarSeries;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::num::SignalFloat;

/// Configuration trait bounds for indicator configurations.
#[cfg(feature = "serde")]
pub trait IndicatorConfig:
    Clone + core::fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
}

/// Configuration trait bounds for indicator configurations.
#[cfg(not(feature = "serde"))]
pub trait IndicatorConfig: Clone + core::fmt::Debug + Send + Sync {}

#[cfg(feature = "serde")]
impl<T> IndicatorConfig for T where
    T: Clone + core::fmt::Debug + Serialize + DeserializeOwned + Send + Sync
{
}

#[cfg(not(feature = "serde"))]
impl<T> IndicatorConfig for T where T: Clone + core::fmt::Debug + Send + Sync {}

/// Output of an indicator that can be viewed as named columns.
pub trait IndicatorOutput<T: SignalFloat> {
    /// Column names, in frame order.
    fn column_names(&self) -> &'static [&'static str];

    /// Convert into a [`DataFrame`] with one column per named series.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lengths disagree, which a well-formed
    /// indicator output never does.
    fn to_frame(&self) -> Result<DataFrame<T>>;
}

/// A batch technical indicator over a [`BarSeries`].
///
/// Indicators are pure: `calculate` never mutates the indicator, and the same
/// input always produces bit-identical output. Every output series has the
/// same length as the input, with NaN on positions that lack enough history.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use barsignal_core::{BarSeries, Indicator, Result, Series, SignalFloat};
///
/// struct Sma<T: SignalFloat> {
///     config: SmaConfig,
///     _marker: PhantomData<T>,
/// }
///
/// impl<T: SignalFloat> Indicator<T> for Sma<T> {
///     type Output = SmaOutput<T>;
///     type Config = SmaConfig;
///
///     fn new(config: Self::Config) -> Result<Self> { /* validate */ }
///     fn warmup(&self) -> usize { self.config.window - 1 }
///     fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> { /* ... */ }
///     fn config(&self) -> &Self::Config { &self.config }
/// }
/// ```
pub trait Indicator<T: SignalFloat>: Send + Sync + Sized {
    /// The output type of calculations.
    type Output: IndicatorOutput<T>;

    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// Create an indicator from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IndicatorError::InvalidWindow`] or
    /// [`crate::IndicatorError::InvalidParameter`] if the configuration is
    /// unusable.
    fn new(config: Self::Config) -> Result<Self>;

    /// Number of leading positions that are undefined on a long enough input.
    fn warmup(&self) -> usize;

    /// Compute the indicator over the whole series.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IndicatorError::InsufficientData`] for an empty input.
    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output>;

    /// Get a reference to the current configuration.
    fn config(&self) -> &Self::Config;

    /// Compute the indicator and return its named columns.
    ///
    /// # Errors
    ///
    /// Same as [`Indicator::calculate`].
    fn calculate_frame(&self, data: &BarSeries<T>) -> Result<DataFrame<T>> {
        self.calculate(data)?.to_frame()
    }
}
