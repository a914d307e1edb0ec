//! Simple Moving Average (SMA) indicator.
//!
//! The SMA is the unweighted mean of the last `window` closes.

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::Result,
    num::SignalFloat,
    rolling::rolling_mean,
    series::Series,
    traits::{Indicator, IndicatorOutput},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::check_period;

/// Configuration for the SMA indicator. The window has no default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmaConfig {
    /// The window size for the moving average.
    pub window: usize,
}

impl SmaConfig {
    /// Create a new SMA configuration with the given window.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Output of the SMA indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct SmaOutput<T: SignalFloat> {
    /// Moving average of close, NaN for `i < window - 1`.
    pub sma: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for SmaOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["SMA"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([("SMA", self.sma.clone())])
    }
}

/// Simple Moving Average indicator.
///
/// # Formula
///
/// SMA = (P1 + P2 + ... + Pn) / n
///
/// where Pn is the close at period n.
#[derive(Debug, Clone)]
pub struct Sma<T: SignalFloat> {
    config: SmaConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Sma<T> {
    type Output = SmaOutput<T>;
    type Config = SmaConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("window", config.window)?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn warmup(&self) -> usize {
        self.config.window - 1
    }

    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> {
        data.ensure_not_empty()?;
        tracing::debug!(window = self.config.window, len = data.len(), "computing SMA");

        let sma = rolling_mean(data.close().as_slice(), self.config.window)?;
        Ok(SmaOutput { sma })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute the SMA of `data`'s closes over `window` bars.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] for a zero
/// window and [`barsignal_core::IndicatorError::InsufficientData`] for an
/// empty input.
pub fn sma<T: SignalFloat>(data: &BarSeries<T>, window: usize) -> Result<SmaOutput<T>> {
    Sma::new(SmaConfig::new(window))?.calculate(data)
}
