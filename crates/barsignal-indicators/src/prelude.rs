//! Prelude for barsignal-indicators.
//!
//! This module re-exports all indicator types, their convenience functions
//! and the core traits needed to call them.

// Momentum indicators
pub use crate::momentum::{
    rsi, stochastic, Rsi, RsiConfig, RsiOutput, Stochastic, StochasticConfig, StochasticOutput,
};

// Trend indicators
pub use crate::trend::{
    adx, aroon, ema, macd, sma, Adx, AdxConfig, AdxOutput, Aroon, AroonConfig, AroonOutput, Ema,
    EmaConfig, EmaOutput, Macd, MacdConfig, MacdOutput, Sma, SmaConfig, SmaOutput,
};

// Volatility indicators
pub use crate::volatility::{bollinger_bands, BollingerBands, BollingerConfig, BollingerOutput};

// Catalog
pub use crate::catalog::{compute_all, IndicatorSpec};

// Core traits
pub use barsignal_core::traits::{Indicator, IndicatorOutput};
