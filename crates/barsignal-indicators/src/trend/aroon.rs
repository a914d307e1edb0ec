//! Aroon indicator.
//!
//! Aroon measures where the highest high and lowest low sit inside the last
//! `period` bars. Offsets count from the oldest bar of the window, so the
//! value is 100 when the extreme is the oldest bar and `100 / period` when it
//! is the newest.
//!
//! Formulations that score `period - argmax + 1` read `100 / period` higher
//! on every defined bar and can exceed 100. This one stays in `0..=100`.

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::Result,
    num::SignalFloat,
    rolling::{rolling_argmax, rolling_argmin},
    series::Series,
    traits::{Indicator, IndicatorOutput},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::check_period;

/// Configuration for the Aroon indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AroonConfig {
    /// Lookback window (default: 25).
    pub period: usize,
}

impl Default for AroonConfig {
    fn default() -> Self {
        Self { period: 25 }
    }
}

impl AroonConfig {
    /// Create a new Aroon configuration.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Output of the Aroon indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct AroonOutput<T: SignalFloat> {
    /// Aroon Up, from the position of the highest high.
    pub up: Series<T>,
    /// Aroon Down, from the position of the lowest low.
    pub down: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for AroonOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["Aroon Up", "Aroon Down"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([("Aroon Up", self.up.clone()), ("Aroon Down", self.down.clone())])
    }
}

/// Aroon indicator.
///
/// # Formula
///
/// Aroon Up = 100 * (period - argmax(High, period)) / period
/// Aroon Down = 100 * (period - argmin(Low, period)) / period
///
/// where argmax/argmin is the offset of the extreme from the start of the
/// window, first occurrence on ties.
#[derive(Debug, Clone)]
pub struct Aroon<T: SignalFloat> {
    config: AroonConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Aroon<T> {
    type Output = AroonOutput<T>;
    type Config = AroonConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("period", config.period)?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn warmup(&self) -> usize {
        self.config.period - 1
    }

    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> {
        data.ensure_not_empty()?;
        let period = self.config.period;
        tracing::debug!(period, len = data.len(), "computing Aroon");

        let n = T::from_len(period);
        let score = |offset: T| T::HUNDRED * (n - offset) / n;

        let up = rolling_argmax(data.high().as_slice(), period)?.map(&score);
        let down = rolling_argmin(data.low().as_slice(), period)?.map(&score);

        Ok(AroonOutput { up, down })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute Aroon Up and Aroon Down over `period` bars.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] for a zero
/// period and [`barsignal_core::IndicatorError::InsufficientData`] for an
/// empty input.
pub fn aroon<T: SignalFloat>(data: &BarSeries<T>, period: usize) -> Result<AroonOutput<T>> {
    Aroon::new(AroonConfig::new(period))?.calculate(data)
}
