//! Average Directional Index (ADX) indicator.
//!
//! Directional movement here is the raw bar-to-bar change of the high (for
//! +DM) and the low (for -DM), divided by the true range. There is no
//! Wilder filtering: both sides keep their sign and are not made mutually
//! exclusive.
//!
//! True range is undefined on the first bar. The exponential recurrences seed
//! at the first defined value, so ADX, +DI and -DI are NaN only at `i == 0`.

use core::marker::PhantomData;

use barsignal_core::{
    bar::BarSeries,
    dataframe::DataFrame,
    error::Result,
    ewm::ewm_mean,
    num::SignalFloat,
    series::Series,
    traits::{Indicator, IndicatorOutput},
    utils::true_range,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{check_period, join};

/// Configuration for the ADX indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdxConfig {
    /// Span of every smoothing pass (default: 14).
    pub period: usize,
}

impl Default for AdxConfig {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl AdxConfig {
    /// Create a new ADX configuration.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// Output of the ADX indicator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct AdxOutput<T: SignalFloat> {
    /// Average Directional Index.
    pub adx: Series<T>,
    /// Positive Directional Indicator (+DI).
    pub plus_di: Series<T>,
    /// Negative Directional Indicator (-DI).
    pub minus_di: Series<T>,
}

impl<T: SignalFloat> IndicatorOutput<T> for AdxOutput<T> {
    fn column_names(&self) -> &'static [&'static str] {
        &["ADX", "+DI", "-DI"]
    }

    fn to_frame(&self) -> Result<DataFrame<T>> {
        DataFrame::from_columns([
            ("ADX", self.adx.clone()),
            ("+DI", self.plus_di.clone()),
            ("-DI", self.minus_di.clone()),
        ])
    }
}

/// Average Directional Index indicator.
///
/// # Formula
///
/// TR = max(High - Low, |High - PrevClose|, |Low - PrevClose|)
/// +DI = EMA(100 * (High - PrevHigh) / TR, period)
/// -DI = EMA(100 * (Low - PrevLow) / TR, period)
/// DX = 100 * |+DI - -DI| / (+DI + -DI)
/// ADX = EMA(DX, period)
#[derive(Debug, Clone)]
pub struct Adx<T: SignalFloat> {
    config: AdxConfig,
    _marker: PhantomData<T>,
}

impl<T: SignalFloat> Indicator<T> for Adx<T> {
    type Output = AdxOutput<T>;
    type Config = AdxConfig;

    fn new(config: Self::Config) -> Result<Self> {
        check_period("period", config.period)?;
        Ok(Self {
            config,
            _marker: PhantomData,
        })
    }

    fn warmup(&self) -> usize {
        1
    }

    fn calculate(&self, data: &BarSeries<T>) -> Result<Self::Output> {
        data.ensure_not_empty()?;
        let period = self.config.period;
        tracing::debug!(period, len = data.len(), "computing ADX");

        let (high, low, close) = (data.high(), data.low(), data.close());
        let tr = true_range(high.as_slice(), low.as_slice(), close.as_slice())?;

        let directional = |moves: Series<T>| -> Result<Series<T>> {
            let ratio = moves.zip_with(&tr, |m, r| T::HUNDRED * (m / r))?;
            ewm_mean(ratio.as_slice(), period)
        };
        let (plus_di, minus_di) = join(|| directional(high.diff()), || directional(low.diff()));
        let (plus_di, minus_di) = (plus_di?, minus_di?);

        let dx = plus_di.zip_with(&minus_di, |p, m| T::HUNDRED * (p - m).abs() / (p + m))?;
        tracing::trace!(undefined = dx.nan_count(), "directional index computed");
        let adx = ewm_mean(dx.as_slice(), period)?;

        Ok(AdxOutput {
            adx,
            plus_di,
            minus_di,
        })
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}

/// Compute ADX over `period` bars.
///
/// # Errors
///
/// Returns [`barsignal_core::IndicatorError::InvalidWindow`] for a zero
/// period and [`barsignal_core::IndicatorError::InsufficientData`] for an
/// empty input.
pub fn adx<T: SignalFloat>(data: &BarSeries<T>, period: usize) -> Result<AdxOutput<T>> {
    Adx::new(AdxConfig::new(period))?.calculate(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{bars_from_closes, sample_bars};
    use approx::assert_relative_eq;

    #[test]
    fn test_adx_default_config() {
        assert_eq!(AdxConfig::default().period, 14);
    }

    #[test]
    fn test_adx_undefined_only_at_first_bar() {
        let result = adx(&sample_bars(), 14).unwrap();

        for series in [&result.adx, &result.plus_di, &result.minus_di] {
            assert_eq!(series.len(), 8);
            assert!(series[0].is_nan());
            assert_eq!(series.nan_count(), 1);
        }
    }

    #[test]
    fn test_adx_seeds_at_second_bar() {
        let result = adx(&sample_bars(), 14).unwrap();

        // TR[1] = 3, +DM 2, -DM 1
        assert_relative_eq!(result.plus_di[1], 200.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.minus_di[1], 100.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.adx[1], 100.0 / 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_adx_second_step() {
        let result = adx(&sample_bars(), 14).unwrap();
        let alpha = 2.0 / 15.0;

        // TR[2] = 5, +DM 3, -DM 2
        let plus = alpha * 60.0 + (1.0 - alpha) * 200.0 / 3.0;
        let minus = alpha * 40.0 + (1.0 - alpha) * 100.0 / 3.0;
        assert_relative_eq!(result.plus_di[2], plus, epsilon = 1e-10);
        assert_relative_eq!(result.minus_di[2], minus, epsilon = 1e-10);

        let dx = 100.0 * (plus - minus).abs() / (plus + minus);
        let expected_adx = alpha * dx + (1.0 - alpha) * 100.0 / 3.0;
        assert_relative_eq!(result.adx[2], expected_adx, epsilon = 1e-10);
    }

    #[test]
    fn test_adx_flat_bar_holds_directional_lines() {
        // Bars 1 and 2 are flat at the previous close, so bar 2 has TR = 0
        // and zero movement: both ratios are 0/0.
        let bars = BarSeries::from_columns(
            vec![10.0, 10.0, 10.0, 13.0],
            vec![8.0, 10.0, 10.0, 10.0],
            vec![9.0, 10.0, 10.0, 12.0],
        )
        .unwrap();
        let result = adx(&bars, 3).unwrap();

        // Bar 1: TR 1, +move 0, -move 2
        assert_eq!(result.plus_di[1], 0.0);
        assert_eq!(result.minus_di[1], 200.0);
        assert_eq!(result.adx[1], 100.0);

        // Bar 2 holds the previous values
        assert_eq!(result.plus_di[2], 0.0);
        assert_eq!(result.minus_di[2], 200.0);
        assert_eq!(result.adx[2], 100.0);

        // Bar 3: TR 3, ratios 100 and 0, previous weight (1-α)^2 = 0.25
        assert_relative_eq!(result.plus_di[3], 200.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.minus_di[3], 200.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(result.adx[3], 50.0, epsilon = 1e-10);
        assert_eq!(result.adx.nan_count(), 1);
    }

    #[test]
    fn test_adx_zero_directional_lines_give_nan_dx() {
        // The first three bars are identical, so +DI = -DI = 0 and DX = 0/0
        let bars = BarSeries::<f64>::from_columns(
            vec![11.0, 11.0, 11.0, 12.0],
            vec![9.0, 9.0, 9.0, 9.0],
            vec![10.0, 10.0, 10.0, 11.0],
        )
        .unwrap();
        let result = adx(&bars, 3).unwrap();

        assert_eq!(result.plus_di[2], 0.0);
        assert_eq!(result.minus_di[2], 0.0);
        assert!(result.adx[1].is_nan());
        assert!(result.adx[2].is_nan());

        // Bar 3: TR 3, +move 1, so +DI = 0.5 * 100/3 and ADX seeds at DX = 100
        assert_relative_eq!(result.plus_di[3], 50.0 / 3.0, epsilon = 1e-10);
        assert_eq!(result.minus_di[3], 0.0);
        assert_relative_eq!(result.adx[3], 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_adx_single_bar() {
        let result = adx(&bars_from_closes(&[10.0]), 14).unwrap();
        assert_eq!(result.adx.nan_count(), 1);
    }

    #[test]
    fn test_adx_frame_columns() {
        let frame = adx(&sample_bars(), 3).unwrap().to_frame().unwrap();
        assert_eq!(frame.column_names(), vec!["ADX", "+DI", "-DI"]);
    }
}
