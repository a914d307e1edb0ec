//! Stochastic Oscillator indicator.
//!
//! Locates the close within the high-low range of the last `period` bars.

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::Result,
    num::SignalFloat,
    rolling::{rolling_max, rolling_mean, rolling_min},
    series::Series,
    traits::{Indicator, IndicatorOutput},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::check_period;

/// Configuration for the Stochastic Oscillator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StochasticConfig {
    /// Lookback for the high-low range (default: 14).
    pub period: usize,
    /// Window of the %D moving average (default: 3).
    pub smooth: usize,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            period: 14,
            smooth: 3,
        }
    }
}

impl StochasticConfig {
    /// Create a new Stochastic configuration.
    #[must_use]
    pub fn new(period: usize, smooth: usize) -> Self {
        Self { period, smooth }
    }
}

/// Output of the Stochastic Oscillator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct StochasticOutput<T: SignalFloat> {
    /// %K line.
    pub k: Series<T>,
    /// %D line, the moving average of %K.
    pub d: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for StochasticOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["%K", "%D"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([("%K", self.k.clone()), ("%D", self.d.clone())])
    }
}

/// Stochastic Oscillator.
///
/// # Formula
///
/// %K = 100 * (Close - LowestLow) / (HighestHigh - LowestLow)
/// %D = SMA(%K, smooth)
///
/// A window whose high equals its low has no range; %K there is NaN (close
/// on the range) or infinite, and %D inherits it.
#[derive(Debug, Clone)]
pub struct Stochastic<T: SignalFloat> {
    config: StochasticConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Stochastic<T> {
    type Output = StochasticOutput<T>;
    type Config = StochasticConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("period", config.period)?;
        check_period("smooth", config.smooth)?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn warmup(&self) -> usize {
        self.config.period + self.config.smooth - 2
    }

    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> {
        data.ensure_not_empty()?;
        let StochasticConfig { period, smooth } = self.config;
        tracing::debug!(period, smooth, len = data.len(), "computing Stochastic");

        let low_min = rolling_min(data.low().as_slice(), period)?;
        let high_max = rolling_max(data.high().as_slice(), period)?;

        let close = data.close();
        let k: Series<T> = (0..data.len())
            .map(|i| T::HUNDRED * (close[i] - low_min[i]) / (high_max[i] - low_min[i]))
            .collect();
        let d = rolling_mean(k.as_slice(), smooth)?;

        Ok(StochasticOutput { k, d })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute the Stochastic Oscillator.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] for a zero
/// period or smoothing window and
/// [`barsignal_core::IndicatorError::InsufficientData`] for an empty input.
pub fn stochastic<T: SignalFloat>(
    data: &BarSeries<T>,
    period: usize,
    smooth: usize,
) -> Result<StochasticOutput<T>> {
    Stochastic::new(StochasticConfig::new(period, smooth))?.calculate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{bars_from_closes, sample_bars};
    use approx::assert_relative_eq;
    use barsignal_core::IndicatorError;

    #[test]
    fn test_stochastic_default_config() {
        let config = StochasticConfig::default();
        assert_eq!(config.period, 14);
        assert_eq!(config.smooth, 3);
    }

    #[test]
    fn test_stochastic_calculate() {
        let bars = sample_bars();
        let result = stochastic(&bars, 3, 2).unwrap();

        assert!(result.k[1].is_nan());
        assert!(result.d[2].is_nan());

        // i=2: low_min 8, high_max 15, close 13
        assert_relative_eq!(result.k[2], 500.0 / 7.0, epsilon = 1e-10);
        // i=3: low_min 9, high_max 15, close 11
        assert_relative_eq!(result.k[3], 100.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(
            result.d[3],
            (500.0 / 7.0 + 100.0 / 3.0) / 2.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_stochastic_bounds() {
        let bars = sample_bars();
        let result = stochastic(&bars, 3, 3).unwrap();
        for &k in result.k.iter().skip(2) {
            assert!((0.0..=100.0).contains(&k));
        }
    }

    #[test]
    fn test_stochastic_zero_range_is_nan() {
        let bars = bars_from_closes(&[5.0, 5.0, 5.0, 5.0]);
        let result = stochastic(&bars, 2, 2).unwrap();
        assert_eq!(result.k.nan_count(), 4);
        assert_eq!(result.d.nan_count(), 4);
    }

    #[test]
    fn test_stochastic_zero_range_off_close_is_infinite() {
        let bars = BarSeries::<f64>::from_columns(
            vec![5.0, 5.0, 5.0, 5.0],
            vec![5.0, 5.0, 5.0, 5.0],
            vec![5.0, 6.0, 7.0, 4.0],
        )
        .unwrap();
        let result = stochastic(&bars, 2, 2).unwrap();

        assert!(result.k[0].is_nan());
        assert_eq!(result.k[1], f64::INFINITY);
        assert_eq!(result.k[2], f64::INFINITY);
        assert_eq!(result.k[3], f64::NEG_INFINITY);

        assert_eq!(result.d[2], f64::INFINITY);
        assert!(result.d[3].is_nan());
    }

    #[test]
    fn test_stochastic_invalid_smooth() {
        assert_eq!(
            Stochastic::<f64>::new(StochasticConfig::new(14, 0)).err(),
            Some(IndicatorError::InvalidWindow(0))
        );
    }

    #[test]
    fn test_stochastic_frame_columns() {
        let frame = stochastic(&sample_bars(), 3, 2).unwrap().to_frame().unwrap();
        assert_eq!(frame.column_names(), vec!["%K", "%D"]);
        assert_eq!(frame.len(), 8);
    }
}
