//! Bollinger Bands indicator.
//!
//! Bollinger Bands are volatility bands placed above and below a moving average.
//! Band width uses the sample standard deviation (divisor `period - 1`).

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::{IndicatorError, Result},
    num::SignalFloat,
    rolling::{rolling_mean, rolling_std},
    series::Series,
    traits::{Indicator, IndicatorOutput},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::check_period;

fn default_num_std() -> f64 {
    2.0
}

/// Configuration for Bollinger Bands. The period has no default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BollingerConfig {
    /// The window size for the moving average and standard deviation.
    pub period: usize,
    /// Number of standard deviations for bands (default: 2.0).
    #[cfg_attr(feature = "serde", serde(default = "default_num_std"))]
    pub num_std: f64,
}

impl BollingerConfig {
    /// Create a new configuration with the default multiplier of 2.0.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self {
            period,
            num_std: default_num_std(),
        }
    }

    /// Set the standard deviation multiplier.
    #[must_use]
    pub fn with_num_std(mut self, num_std: f64) -> Self {
        self.num_std = num_std;
        self
    }
}

/// Output of the Bollinger Bands indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct BollingerOutput<T: SignalFloat> {
    /// Upper band (middle + k * std).
    pub upper: Series<T>,
    /// Middle band (SMA).
    pub middle: Series<T>,
    /// Lower band (middle - k * std).
    pub lower: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for BollingerOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["Upper Band", "Middle Band", "Lower Band"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([
            ("Upper Band", self.upper.clone()),
            ("Middle Band", self.middle.clone()),
            ("Lower Band", self.lower.clone()),
        ])
    }
}

/// Bollinger Bands indicator.
///
/// # Formula
///
/// Middle Band = SMA(Close, period)
/// Upper Band = Middle Band + (num_std * StdDev)
/// Lower Band = Middle Band - (num_std * StdDev)
#[derive(Debug, Clone)]
pub struct BollingerBands<T: SignalFloat> {
    config: BollingerConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for BollingerBands<T> {
    type Output = BollingerOutput<T>;
    type Config = BollingerConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("period", config.period)?;
        if !(config.num_std.is_finite() && config.num_std > 0.0) {
            tracing::debug!(num_std = config.num_std, "rejecting Bollinger multiplier");
            return Err(IndicatorError::invalid_parameter(
                "num_std",
                config.num_std,
                "finite positive number",
            ));
        }
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
        let BollingerConfig { period, num_std } = self.config;
        tracing::debug!(period, num_std, len = data.len(), "computing Bollinger Bands");

        let close = data.close().as_slice();
        let middle = rolling_mean(close, period)?;
        let std = rolling_std(close, period)?;
        let k = T::from_f64_lossy(num_std);

        let half_width = std.map(|s| k * s);
        let upper = middle.zip_with(&half_width, |m, w| m + w)?;
        let lower = middle.zip_with(&half_width, |m, w| m - w)?;

        Ok(BollingerOutput {
            upper,
            middle,
            lower,
        })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute Bollinger Bands over `period` bars with a 2.0 multiplier.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidWindow`] for a zero period and
/// [`IndicatorError::InsufficientData`] for an empty input.
pub fn bollinger_bands<T: SignalFloat>(
    data: &BarSeries<T>,
    period: usize,
) -> Result<BollingerOutput<T>> {
    BollingerBands::new(BollingerConfig::new(period))?.calculate(data)
}
