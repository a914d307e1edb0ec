//! Price bar types.
//!
//! Indicators read only high, low and close. Time is carried by position in a
//! [`BarSeries`]; there are no timestamps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::SignalFloat;
use crate::series::Series;

/// A single price bar.
///
/// # Example
///
/// ```rust
/// use barsignal_core::Bar;
///
/// let bar = Bar::new(105.0, 98.0, 103.0);
/// assert_eq!(bar.high - bar.low, 7.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct Bar<T: SignalFloat> {
    /// Highest price during the period.
    pub high: T,
    /// Lowest price during the period.
    pub low: T,
    /// Closing price for the period.
    pub close: T,
}

impl<T: SignalFloat> Bar<T> {
    /// Create a new bar.
    #[must_use]
    pub fn new(high: T, low: T, close: T) -> Self {
        Self { high, low, close }
    }
}

/// Columnar storage of a chronologically ordered bar sequence.
///
/// # Example
///
/// ```rust
/// use barsignal_core::{Bar, BarSeries};
///
/// let mut bars: BarSeries<f64> = BarSeries::new();
/// bars.push(Bar::new(105.0, 98.0, 103.0));
/// bars.push(Bar::new(108.0, 101.0, 107.0));
///
/// assert_eq!(bars.len(), 2);
/// assert_eq!(bars.close()[1], 107.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct BarSeries<T: SignalFloat> {
    high: Series<T>,
    low: Series<T>,
    close: Series<T>,
}

impl<T: SignalFloat> BarSeries<T> {
    /// Create a new empty bar series.
    #[must_use]
    pub fn new() -> Self {
        Self {
            high: Series::new(),
            low: Series::new(),
            close: Series::new(),
        }
    }

    /// Create a new bar series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            high: Series::with_capacity(capacity),
            low: Series::with_capacity(capacity),
            close: Series::with_capacity(capacity),
        }
    }

    /// Build a bar series from high, low and close columns.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] unless all three columns have
    /// the length of `high`.
    pub fn from_columns(
        high: impl Into<Series<T>>,
        low: impl Into<Series<T>>,
        close: impl Into<Series<T>>,
    ) -> Result<Self> {
        let (high, low, close) = (high.into(), low.into(), close.into());
        for other in [&low, &close] {
            if other.len() != high.len() {
                return Err(IndicatorError::LengthMismatch {
                    expected: high.len(),
                    actual: other.len(),
                });
            }
        }
        Ok(Self { high, low, close })
    }

    /// Returns the number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns `true` if there are no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Reject an empty sequence; every indicator needs at least one bar.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::InsufficientData`] when there are no bars.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(IndicatorError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        Ok(())
    }

    /// Append a bar.
    pub fn push(&mut self, bar: Bar<T>) {
        self.high.push(bar.high);
        self.low.push(bar.low);
        self.close.push(bar.close);
    }

    /// Get the bar at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Bar<T>> {
        Some(Bar::new(
            self.high.get(index)?,
            self.low.get(index)?,
            self.close.get(index)?,
        ))
    }

    /// High prices.
    #[must_use]
    pub fn high(&self) -> &Series<T> {
        &self.high
    }

    /// Low prices.
    #[must_use]
    pub fn low(&self) -> &Series<T> {
        &self.low
    }

    /// Close prices.
    #[must_use]
    pub fn close(&self) -> &Series<T> {
        &self.close
    }

    /// Iterate over the bars in order.
    pub fn iter(&self) -> impl Iterator<Item = Bar<T>> + '_ {
        self.high
            .iter()
            .zip(self.low.iter())
            .zip(self.close.iter())
            .map(|((&high, &low), &close)| Bar::new(high, low, close))
    }
}

impl<T: SignalFloat> FromIterator<Bar<T>> for BarSeries<T> {
    fn from_iter<I: IntoIterator<Item = Bar<T>>>(iter: I) -> Self {
        let mut series = Self::new();
        for bar in iter {
            series.push(bar);
        }
        series
    }
}
