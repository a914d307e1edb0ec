//! Named indicator columns with deterministic iteration order.
//!
//! [`DataFrame`] is the table form of an indicator's output: every column
//! has the same length as the input bars and columns iterate in the order
//! they were added.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::SignalFloat;
use crate::series::Series;

/// Column-oriented table keyed by column name.
///
/// Backed by `IndexMap`, so `column_names()` and `iter()` always follow
/// insertion order and two frames built the same way compare equal.
///
/// # Example
///
/// ```rust
/// use barsignal_core::{DataFrame, Series};
///
/// let mut df: DataFrame<f64> = DataFrame::new();
/// df.add_column("%K", Series::from_vec(vec![f64::NAN, 50.0, 75.0])).unwrap();
/// df.add_column("%D", Series::from_vec(vec![f64::NAN, f64::NAN, 62.5])).unwrap();
///
/// assert_eq!(df.len(), 3);
/// assert_eq!(df.column_names(), vec!["%K", "%D"]);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct DataFrame<T: SignalFloat> {
    columns: IndexMap<String, Series<T>>,
}

impl<T: SignalFloat> Default for DataFrame<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SignalFloat> DataFrame<T> {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Create an empty frame with room for `capacity` columns.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: IndexMap::with_capacity(capacity),
        }
    }

    /// Build a frame from `(name, series)` pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::DuplicateColumn`] if a name repeats and
    /// [`IndicatorError::LengthMismatch`] if the series differ in length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Series<T>)>,
        S: Into<String>,
    {
        let iter = columns.into_iter();
        let mut df = Self::with_capacity(iter.size_hint().0);
        for (name, series) in iter {
            df.add_column(name, series)?;
        }
        Ok(df)
    }

    /// Number of rows (0 for a frame without columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Series::len)
    }

    /// `true` if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get a column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Series<T>> {
        self.columns.get(name)
    }

    /// Append a column.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::DuplicateColumn`] if the name is taken and
    /// [`IndicatorError::LengthMismatch`] if the series length differs from
    /// the existing columns.
    pub fn add_column(&mut self, name: impl Into<String>, series: Series<T>) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(IndicatorError::DuplicateColumn(name));
        }

        if !self.columns.is_empty() && series.len() != self.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: series.len(),
            });
        }

        self.columns.insert(name, series);
        Ok(())
    }

    /// Concatenate horizontally: `self`'s columns followed by `other`'s.
    ///
    /// A frame without columns is neutral.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if both frames have columns
    /// and their row counts differ, [`IndicatorError::DuplicateColumn`] on a
    /// name collision.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        if self.column_count() > 0 && other.column_count() > 0 && self.len() != other.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let mut result = self.clone();
        for (name, series) in &other.columns {
            result.add_column(name.clone(), series.clone())?;
        }
        Ok(result)
    }

    /// Iterate `(name, series)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series<T>)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Bitwise equality of every column, treating NaN in the same position
    /// as equal.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1.bit_eq(v2))
    }
}

impl<T: SignalFloat> PartialEq for DataFrame<T> {
    fn eq(&self, other: &Self) -> bool {
        self.columns.len() == other.columns.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|((k1, v1), (k2, v2))| k1 == k2 && v1 == v2)
    }
}
