//! Declarative indicator selection.
//!
//! An [`IndicatorSpec`] names one indicator and its parameters. Lists of
//! specs are typically loaded from JSON or TOML:
//!
//! ```json
//! [
//!   { "indicator": "sma", "window": 20 },
//!   { "indicator": "macd" },
//!   { "indicator": "bollinger_bands", "period": 20, "num_std": 2.5 }
//! ]
//! ```
//!
//! Omitted parameters take the indicator's defaults. SMA, EMA and Bollinger
//! Bands have no default window, so theirs must be given.

use barsignal_core::{
    bar::BarSeries, dataframe::DataFrame, error::Result, num::SignalFloat, traits::Indicator,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::momentum::{Rsi, RsiConfig, Stochastic, StochasticConfig};
use crate::trend::{Adx, AdxConfig, Aroon, AroonConfig, Ema, EmaConfig, Macd, MacdConfig, Sma, SmaConfig};
use crate::volatility::{BollingerBands, BollingerConfig};

/// One indicator together with its configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "indicator", rename_all = "snake_case"))]
pub enum IndicatorSpec {
    /// Simple Moving Average.
    Sma(SmaConfig),
    /// Exponential Moving Average.
    Ema(EmaConfig),
    /// Bollinger Bands.
    BollingerBands(BollingerConfig),
    /// Relative Strength Index.
    Rsi(RsiConfig),
    /// Stochastic Oscillator.
    Stochastic(StochasticConfig),
    /// Moving Average Convergence Divergence.
    Macd(MacdConfig),
    /// Average Directional Index.
    Adx(AdxConfig),
    /// Aroon Up / Aroon Down.
    Aroon(AroonConfig),
}

impl IndicatorSpec {
    /// Short identifier, as used in the `indicator` tag.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sma(_) => "sma",
            Self::Ema(_) => "ema",
            Self::BollingerBands(_) => "bollinger_bands",
            Self::Rsi(_) => "rsi",
            Self::Stochastic(_) => "stochastic",
            Self::Macd(_) => "macd",
            Self::Adx(_) => "adx",
            Self::Aroon(_) => "aroon",
        }
    }

    /// Names of the columns [`IndicatorSpec::compute`] produces, in order.
    #[must_use]
    pub fn column_names(&self) -> &'static [&'static str] {
        match self {
            Self::Sma(_) => &["SMA"],
            Self::Ema(_) => &["EMA"],
            Self::BollingerBands(_) => &["Upper Band", "Middle Band", "Lower Band"],
            Self::Rsi(_) => &["RSI"],
            Self::Stochastic(_) => &["%K", "%D"],
            Self::Macd(_) => &["MACD", "Signal", "Histogram"],
            Self::Adx(_) => &["ADX", "+DI", "-DI"],
            Self::Aroon(_) => &["Aroon Up", "Aroon Down"],
        }
    }

    /// Compute the indicator and return its named columns.
    ///
    /// # Errors
    ///
    /// Returns the configuration or input error of the underlying indicator.
    pub fn compute<T: SignalFloat>(&self, bars: &BarSeries<T>) -> Result<DataFrame<T>> {
        tracing::debug!(indicator = self.name(), len = bars.len(), "evaluating spec");
        match self {
            Self::Sma(config) => Sma::new(config.clone())?.calculate_frame(bars),
            Self::Ema(config) => Ema::new(config.clone())?.calculate_frame(bars),
            Self::BollingerBands(config) => {
                BollingerBands::new(config.clone())?.calculate_frame(bars)
            }
            Self::Rsi(config) => Rsi::new(config.clone())?.calculate_frame(bars),
            Self::Stochastic(config) => Stochastic::new(config.clone())?.calculate_frame(bars),
            Self::Macd(config) => Macd::new(config.clone())?.calculate_frame(bars),
            Self::Adx(config) => Adx::new(config.clone())?.calculate_frame(bars),
            Self::Aroon(config) => Aroon::new(config.clone())?.calculate_frame(bars),
        }
    }
}

macro_rules! impl_from_config {
    ($($config:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$config> for IndicatorSpec {
                fn from(config: $config) -> Self {
                    Self::$variant(config)
                }
            }
        )*
    };
}

impl_from_config! {
    SmaConfig => Sma,
    EmaConfig => Ema,
    BollingerConfig => BollingerBands,
    RsiConfig => Rsi,
    StochasticConfig => Stochastic,
    MacdConfig => Macd,
    AdxConfig => Adx,
    AroonConfig => Aroon,
}

/// Compute several indicators over the same bars and join their columns.
///
/// Columns appear in spec order. With the `parallel` feature the indicators
/// are computed on the rayon pool; the result is identical.
///
/// # Errors
///
/// Returns the first indicator error in spec order, or
/// [`barsignal_core::IndicatorError::DuplicateColumn`] if two specs produce
/// the same column name (for example two SMAs).
pub fn compute_all<T: SignalFloat>(
    bars: &BarSeries<T>,
    specs: &[IndicatorSpec],
) -> Result<DataFrame<T>> {
    tracing::debug!(count = specs.len(), len = bars.len(), "computing indicator set");

    #[cfg(feature = "parallel")]
    let frames: Vec<Result<DataFrame<T>>> = {
        use rayon::prelude::*;
        specs.par_iter().map(|spec| spec.compute(bars)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let frames: Vec<Result<DataFrame<T>>> = specs.iter().map(|spec| spec.compute(bars)).collect();

    frames
        .into_iter()
        .try_fold(DataFrame::new(), |acc, frame| acc.concat(&frame?))
}
