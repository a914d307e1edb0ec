//! Index-aligned numeric series.
//!
//! A [`Series`] is the unit of indicator output: one value per input bar, with
//! NaN at positions where the indicator is undefined.

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, Result};
use crate::num::SignalFloat;

/// A contiguous series of floating-point values.
///
/// # Example
///
/// ```rust
/// use barsignal_core::Series;
///
/// let series: Series<f64> = Series::from_vec(vec![f64::NAN, 101.5, 99.8]);
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.nan_count(), 1);
/// assert_eq!(series.first_valid_index(), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: SignalFloat"))]
pub struct Series<T: SignalFloat> {
    data: Vec<T>,
}

impl<T: SignalFloat> Series<T> {
    /// Create a new empty series.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Create a new series with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a series from an existing vector.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a series of `len` NaN values.
    #[must_use]
    pub fn nan(len: usize) -> Self {
        Self {
            data: vec![T::NAN; len],
        }
    }

    /// Returns the number of elements in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the series contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append a value to the end of the series.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Get the value at the given index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the series and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// First differences: `y[i] = x[i] - x[i-1]`, NaN at position 0.
    #[must_use]
    pub fn diff(&self) -> Self {
        let mut result = Vec::with_capacity(self.len());
        if !self.data.is_empty() {
            result.push(T::NAN);
        }
        for pair in self.data.windows(2) {
            result.push(pair[1] - pair[0]);
        }
        Self { data: result }
    }

    /// Apply a function to each element.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(T) -> T,
    {
        self.data.iter().map(|&x| f(x)).collect()
    }

    /// Combine two equally long series element by element.
    ///
    /// # Errors
    ///
    /// Returns [`IndicatorError::LengthMismatch`] if the lengths differ.
    pub fn zip_with<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.len() != other.len() {
            return Err(IndicatorError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    /// Count the number of NaN values.
    #[must_use]
    pub fn nan_count(&self) -> usize {
        self.data.iter().filter(|x| x.is_nan()).count()
    }

    /// Index of the first non-NaN value.
    #[must_use]
    pub fn first_valid_index(&self) -> Option<usize> {
        self.data.iter().position(|x| !x.is_nan())
    }

    /// Bitwise equality, treating NaN as equal to a NaN with the same bits.
    ///
    /// `PartialEq` never considers two warm-up regions equal; this does.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a.to_f64_lossy().to_bits() == b.to_f64_lossy().to_bits())
    }
}

impl<T: SignalFloat> Index<usize> for Series<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: SignalFloat> FromIterator<T> for Series<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: SignalFloat> IntoIterator for Series<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: SignalFloat> IntoIterator for &'a Series<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: SignalFloat> From<Vec<T>> for Series<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: SignalFloat> From<&[T]> for Series<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_series() {
        let series: Series<f64> = Series::nan(4);
        assert_eq!(series.len(), 4);
        assert_eq!(series.nan_count(), 4);
        assert_eq!(series.first_valid_index(), None);
    }

    #[test]
    fn test_diff() {
        let series: Series<f64> = Series::from_vec(vec![1.0, 3.0, 6.0, 10.0]);
        let result = series.diff();

        assert_eq!(result.len(), 4);
        assert!(result[0].is_nan());
        assert_eq!(result[1], 2.0);
        assert_eq!(result[2], 3.0);
        assert_eq!(result[3], 4.0);
    }

    #[test]
    fn test_diff_single_and_empty() {
        let single: Series<f64> = Series::from_vec(vec![5.0]);
        let result = single.diff();
        assert_eq!(result.len(), 1);
        assert!(result[0].is_nan());

        let empty: Series<f64> = Series::new();
        assert!(empty.diff().is_empty());
    }

    #[test]
    fn test_zip_with() {
        let a: Series<f64> = Series::from_vec(vec![5.0, 7.0]);
        let b: Series<f64> = Series::from_vec(vec![2.0, 3.0]);
        let result = a.zip_with(&b, |x, y| x - y).unwrap();
        assert_eq!(result.as_slice(), &[3.0, 4.0]);

        let short: Series<f64> = Series::from_vec(vec![1.0]);
        assert_eq!(
            a.zip_with(&short, |x, y| x + y),
            Err(IndicatorError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_bit_eq_treats_warmup_as_equal() {
        let a: Series<f64> = Series::from_vec(vec![f64::NAN, 1.0]);
        let b: Series<f64> = Series::from_vec(vec![f64::NAN, 1.0]);
        assert_ne!(a, b);
        assert!(a.bit_eq(&b));

        let c: Series<f64> = Series::from_vec(vec![f64::NAN, 1.0 + 1e-15]);
        assert!(!a.bit_eq(&c));
    }

    #[test]
    fn test_get() {
        let series: Series<f64> = Series::from_vec(vec![1.0, 2.0]);
        assert_eq!(series.get(1), Some(2.0));
        assert_eq!(series.get(2), None);
    }
}
