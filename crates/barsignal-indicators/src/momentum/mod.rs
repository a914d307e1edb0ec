//! Momentum indicators.
//!
//! This module contains momentum indicators:
//! - RSI (Relative Strength Index)
//! - Stochastic Oscillator

mod rsi;
mod stochastic;

pub use rsi::{rsi, Rsi, RsiConfig, RsiOutput};
pub use stochastic::{stochastic, Stochastic, StochasticConfig, StochasticOutput};
