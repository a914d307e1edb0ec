//! Monotonic deque for sliding-window extremes.
//!
//! [`ExtremaWindow`] answers "where is the max (or min) of the last `window`
//! values" in amortised O(1) per push. Ties resolve to the earliest position.

use std::collections::VecDeque;

use crate::num::SignalFloat;

/// Which extreme an [`ExtremaWindow`] tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extreme {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
}

impl Extreme {
    #[inline]
    fn beats<T: SignalFloat>(self, candidate: T, incumbent: T) -> bool {
        match self {
            Extreme::Min => candidate < incumbent,
            Extreme::Max => candidate > incumbent,
        }
    }
}

/// Sliding window that tracks the position of its extreme value.
///
/// Values are pushed with strictly consecutive indices. NaN values are never
/// candidates; instead the window reports no extreme while a NaN is inside it.
///
/// # Example
///
/// ```rust
/// use barsignal_core::window::{Extreme, ExtremaWindow};
///
/// let mut window: ExtremaWindow<f64> = ExtremaWindow::new(3, Extreme::Max);
/// for (i, &v) in [10.0, 12.0, 15.0, 14.0].iter().enumerate() {
///     window.push(i, v);
/// }
/// assert_eq!(window.current(3), Some((2, 15.0)));
/// ```
#[derive(Clone, Debug)]
pub struct ExtremaWindow<T: SignalFloat> {
    window: usize,
    extreme: Extreme,
    /// (index, value) pairs, front is the current extreme.
    candidates: VecDeque<(usize, T)>,
    last_nan: Option<usize>,
}

impl<T: SignalFloat> ExtremaWindow<T> {
    /// Create an empty window of `window` positions.
    ///
    /// # Panics
    ///
    /// Panics if `window` is 0.
    #[must_use]
    pub fn new(window: usize, extreme: Extreme) -> Self {
        assert!(window > 0, "ExtremaWindow size must be > 0");
        Self {
            window,
            extreme,
            candidates: VecDeque::with_capacity(window),
            last_nan: None,
        }
    }

    /// Push the value observed at `index`.
    pub fn push(&mut self, index: usize, value: T) {
        while let Some(&(front, _)) = self.candidates.front() {
            if front + self.window <= index {
                self.candidates.pop_front();
            } else {
                break;
            }
        }

        if value.is_nan() {
            self.last_nan = Some(index);
            return;
        }

        // Equal values stay queued behind the earlier one
        while let Some(&(_, back)) = self.candidates.back() {
            if self.extreme.beats(value, back) {
                self.candidates.pop_back();
            } else {
                break;
            }
        }
        self.candidates.push_back((index, value));
    }

    /// Extreme `(index, value)` of the window ending at `index`.
    ///
    /// Returns `None` if a NaN lies inside the window or nothing was pushed.
    #[must_use]
    pub fn current(&self, index: usize) -> Option<(usize, T)> {
        if let Some(nan_at) = self.last_nan {
            if nan_at + self.window > index {
                return None;
            }
        }
        self.candidates.front().copied()
    }

    /// Window size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.window
    }
}
