//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use barsignal_core::prelude::*;
//!
//! let bars: BarSeries<f64> = [Bar::new(10.0, 8.0, 9.0), Bar::new(12.0, 9.0, 10.0)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(bars.len(), 2);
//! ```

// Core types
pub use crate::bar::{Bar, BarSeries};
pub use crate::dataframe::DataFrame;
pub use crate::num::SignalFloat;
pub use crate::series::Series;

// Error types
pub use crate::error::{IndicatorError, Result};

// Traits
pub use crate::traits::{Indicator, IndicatorConfig, IndicatorOutput};

// Primitives
pub use crate::ewm::{ewm_mean, smoothing_factor};
pub use crate::rolling::{
    rolling_argmax, rolling_argmin, rolling_max, rolling_mean, rolling_min, rolling_std,
    rolling_variance,
};
pub use crate::utils::true_range;
