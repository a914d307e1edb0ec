//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator that shows the relationship
//! between two exponential moving averages of prices.

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::Result,
    ewm::ewm_mean,
    num::SignalFloat,
    series::Series,
    traits::{Indicator, IndicatorOutput},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{check_period, join};

/// Configuration for the MACD indicator.
///
/// `fast` is not required to be shorter than `slow`; swapping them flips the
/// sign of the MACD line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MacdConfig {
    /// Fast EMA period (default: 12).
    pub fast: usize,
    /// Slow EMA period (default: 26).
    pub slow: usize,
    /// Signal line EMA period (default: 9).
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl MacdConfig {
    /// Create a new MACD configuration.
    #[must_use]
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }
}

/// Output of the MACD indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct MacdOutput<T: SignalFloat> {
    /// MACD line (fast EMA - slow EMA).
    pub macd: Series<T>,
    /// Signal line (EMA of MACD line).
    pub signal: Series<T>,
    /// Histogram (MACD - Signal).
    pub histogram: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for MacdOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["MACD", "Signal", "Histogram"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([
            ("MACD", self.macd.clone()),
            ("Signal", self.signal.clone()),
            ("Histogram", self.histogram.clone()),
        ])
    }
}

/// Moving Average Convergence Divergence indicator.
///
/// # Formula
///
/// MACD Line = EMA(Close, fast) - EMA(Close, slow)
/// Signal Line = EMA(MACD Line, signal)
/// Histogram = MACD Line - Signal Line
///
/// Every EMA is gapless, so all three series are defined from the first bar.
#[derive(Debug, Clone)]
pub struct Macd<T: SignalFloat> {
    config: MacdConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Macd<T> {
    type Output = MacdOutput<T>;
    type Config = MacdConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("fast", config.fast)?;
        check_period("slow", config.slow)?;
        check_period("signal", config.signal)?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn warmup(&self) -> usize {
        0
    }

    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> {
        data.ensure_not_empty()?;
        let MacdConfig { fast, slow, signal } = self.config;
        tracing::debug!(fast, slow, signal, len = data.len(), "computing MACD");

        let close = data.close().as_slice();
        let (ema_fast, ema_slow) = join(|| ewm_mean(close, fast), || ewm_mean(close, slow));

        let macd = ema_fast?.zip_with(&ema_slow?, |f, s| f - s)?;
        let signal = ewm_mean(macd.as_slice(), signal)?;
        let histogram = macd.zip_with(&signal, |m, s| m - s)?;

        Ok(MacdOutput {
            macd,
            signal,
            histogram,
        })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute MACD with the given periods.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] if any period is
/// zero and [`barsignal_core::IndicatorError::InsufficientData`] for an empty
/// input.
pub fn macd<T: SignalFloat>(
    data: &BarSeries<T>,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<MacdOutput<T>> {
    Macd::new(MacdConfig::new(fast, slow, signal))?.calculate(data)
}
