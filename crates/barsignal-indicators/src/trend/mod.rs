//! Trend indicators.
//!
//! This module contains trend-following indicators:
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)
//! - ADX (Average Directional Index)
//! - Aroon

mod adx;
mod aroon;
mod ema;
mod macd;
mod sma;

pub use adx::{adx, Adx, AdxConfig, AdxOutput};
pub use aroon::{aroon, Aroon, AroonConfig, AroonOutput};
pub use ema::{ema, Ema, EmaConfig, EmaOutput};
pub use macd::{macd, Macd, MacdConfig, MacdOutput};
pub use sma::{sma, Sma, SmaConfig, SmaOutput};
