//! # barsignal-indicators
//!
//! Technical indicators over high/low/close price bars.
//!
//! - **Trend**: SMA, EMA, MACD, ADX, Aroon
//! - **Momentum**: RSI, Stochastic Oscillator
//! - **Volatility**: Bollinger Bands
//!
//! Every indicator is a pure batch transform: each output series has the
//! input's length, with NaN on the warm-up positions. [`catalog`] selects and
//! combines indicators from serializable specs.
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Serializable configs, outputs and specs
//! - `parallel` - Compute independent series on the rayon thread pool
//!
//! # Example
//!
//! ```
//! use barsignal_core::{Bar, BarSeries};
//! use barsignal_indicators::prelude::*;
//!
//! let bars: BarSeries<f64> = [
//!     Bar::new(10.0, 8.0, 9.0),
//!     Bar::new(12.0, 9.0, 10.0),
//!     Bar::new(15.0, 11.0, 13.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! let rsi = Rsi::new(RsiConfig::new(2)).unwrap().calculate(&bars).unwrap();
//! assert_eq!(rsi.rsi.len(), 3);
//! assert_eq!(rsi.rsi[2], 100.0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

use barsignal_core::error::{IndicatorError, Result};

pub mod catalog;
pub mod momentum;
pub mod trend;
pub mod volatility;

pub mod prelude;

pub use prelude::*;

/// Reject a zero period before any computation.
pub(crate) fn check_period(name: &'static str, period: usize) -> Result<()> {
    if period == 0 {
        tracing::debug!(parameter = name, "rejecting zero period");
        return Err(IndicatorError::InvalidWindow(0));
    }
    Ok(())
}

/// Run two independent computations, on the rayon pool when enabled.
#[cfg(feature = "parallel")]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

/// Run two independent computations, on the rayon pool when enabled.
#[cfg(not(feature = "parallel"))]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}
