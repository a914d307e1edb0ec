//! # barsignal-core
//!
//! Core types and numeric primitives for the barsignal indicator library.
//!
//! - [`SignalFloat`] - Trait for numeric types (f32/f64)
//! - [`Series`] - Index-aligned numeric sequence, NaN marks undefined values
//! - [`Bar`] and [`BarSeries`] - High/low/close price bars
//! - [`DataFrame`] - Named indicator columns with deterministic ordering
//! - [`Indicator`] and [`IndicatorOutput`] - Indicator computation traits
//! - [`rolling`] and [`ewm`] - The rolling-window and exponential primitives
//!   every indicator is built from
//!
//! ## Feature Flags
//!
//! - `serde` (default) - Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```rust
//! use barsignal_core::prelude::*;
//!
//! let closes: Series<f64> = Series::from_vec(vec![100.0, 101.5, 99.8, 102.3, 101.0]);
//!
//! let sma = rolling_mean(closes.as_slice(), 3).unwrap();
//! assert_eq!(sma.len(), closes.len());
//! assert!(sma[1].is_nan());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod bar;
pub mod dataframe;
pub mod error;
pub mod ewm;
pub mod num;
pub mod prelude;
pub mod rolling;
pub mod series;
pub mod traits;
pub mod utils;
pub mod window;

pub use bar::{Bar, BarSeries};
pub use dataframe::DataFrame;
pub use error::{IndicatorError, Result};
pub use num::SignalFloat;
pub use series::Series;
pub use traits::{Indicator, IndicatorConfig, IndicatorOutput};
pub use window::{ExtremaWindow, Extreme};
