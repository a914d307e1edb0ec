//! Exponential Moving Average (EMA) indicator.

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

use crate::check_period;

/// Configuration for the EMA indicator. The window (span) has no default.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EmaConfig {
    /// Span of the exponential recurrence.
    pub window: usize,
}

impl EmaConfig {
    /// Create a new EMA configuration with the given window.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

/// Output of the EMA indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct EmaOutput<T: SignalFloat> {
    /// Exponential average of close, defined from the first bar.
    pub ema: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for EmaOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["EMA"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([("EMA", self.ema.clone())])
    }
}

/// Exponential Moving Average indicator.
///
/// # Formula
///
/// α = 2 / (window + 1)
/// EMA[0] = Close[0]
/// EMA[i] = α × Close[i] + (1 - α) × EMA[i-1]
#[derive(Debug, Clone)]
pub struct Ema<T: SignalFloat> {
    config: EmaConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Ema<T> {
    type Output = EmaOutput<T>;
    type Config = EmaConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("window", config.window)?;
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
        tracing::debug!(window = self.config.window, len = data.len(), "computing EMA");

        let ema = ewm_mean(data.close().as_slice(), self.config.window)?;
        Ok(EmaOutput { ema })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute the EMA of `data`'s closes with span `window`.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] for a zero
/// window and [`barsignal_core::IndicatorError::InsufficientData`] for an
/// empty input.
pub fn ema<T: SignalFloat>(data: &BarSeries<T>, window: usize) -> Result<EmaOutput<T>> {
    Ema::new(EmaConfig::new(window))?.calculate(data)
}
