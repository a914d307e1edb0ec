//! Relative Strength Index (RSI) indicator.
//!
//! RSI compares the average gain to the average loss over a window of close
//! changes and maps the ratio onto 0..=100.
//!
//! Averages are plain rolling means, so the first defined value sits at
//! `i == period` (the leading difference costs one bar). Division follows
//! IEEE rules: no losses in the window gives `RSI = 100`, a flat window gives
//! NaN. Nothing is clamped or filled.
//!
//! The first change is undefined rather than zero. Variants that zero-fill it
//! produce a value one bar earlier, at `i == period - 1`.

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::Result,
    num::SignalFloat,
    rolling::rolling_mean,
    series::Series,
    traits::{Indicator, IndicatorOutput},
    utils::{gain, loss},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::check_period;

/// Configuration for the RSI indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsiConfig {
    /// Averaging window (default: 14).
    pub period: usize,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiConfig {
    /// Create a new RSI configuration.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Output of the RSI indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct RsiOutput<T: SignalFloat> {
    /// RSI values in `0..=100`, NaN for `i < period`.
    pub rsi: Series<T>,
    /// Rolling mean of upward close changes.
    pub avg_gain: Series<T>,
    /// Rolling mean of downward close changes, as positive numbers.
    pub avg_loss: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for RsiOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["RSI"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([("RSI", self.rsi.clone())])
    }
}

/// Relative Strength Index indicator.
///
/// # Formula
///
/// Delta = Close[i] - Close[i-1]
/// AvgGain = SMA(max(Delta, 0), period)
/// AvgLoss = SMA(max(-Delta, 0), period)
/// RS = AvgGain / AvgLoss
/// RSI = 100 - 100 / (1 + RS)
#[derive(Debug, Clone)]
pub struct Rsi<T: SignalFloat> {
    config: RsiConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Rsi<T> {
    type Output = RsiOutput<T>;
    type Config = RsiConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("period", config.period)?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn warmup(&self) -> usize {
        self.config.period
    }

    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> {
        data.ensure_not_empty()?;
        let period = self.config.period;
        tracing::debug!(period, len = data.len(), "computing RSI");

        let delta = data.close().diff();
        let gains = delta.map(gain);
        let losses = delta.map(loss);

        let avg_gain = rolling_mean(gains.as_slice(), period)?;
        let avg_loss = rolling_mean(losses.as_slice(), period)?;

        let rsi = avg_gain.zip_with(&avg_loss, |g, l| {
            let rs = g / l;
            T::HUNDRED - T::HUNDRED / (T::ONE + rs)
        })?;

        Ok(RsiOutput {
            rsi,
            avg_gain,
            avg_loss,
        })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute RSI over `period` bars.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] for a zero
/// period and [`barsignal_core::IndicatorError::InsufficientData`] for an
/// empty input.
pub fn rsi<T: SignalFloat>(data: &BarSeries<T>, period: usize) -> Result<RsiOutput<T>> {
    Rsi::new(RsiConfig::new(period))?.calculate(data)
}
