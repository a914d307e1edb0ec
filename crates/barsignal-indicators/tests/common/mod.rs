//! Shared helpers for the indicator integration tests.

#![allow(dead_code)]

use barsignal_core::{Bar, BarSeries, Series};

/// Closes of the classic RSI worked example.
pub const RSI_CLOSES: [f64; 14] = [
    44.0, 44.25, 44.5, 43.75, 44.65, 45.1, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61, 46.28, 46.28,
];

pub const SAMPLE_HIGH: [f64; 8] = [10.0, 12.0, 15.0, 14.0, 16.0, 13.0, 11.0, 9.0];
pub const SAMPLE_LOW: [f64; 8] = [8.0, 9.0, 11.0, 10.0, 11.0, 10.0, 9.0, 8.0];
pub const SAMPLE_CLOSE: [f64; 8] = [9.0, 10.0, 13.0, 11.0, 15.0, 12.0, 10.0, 9.0];

/// Bars whose high, low and close all equal the given close.
pub fn bars_from_closes(closes: &[f64]) -> BarSeries<f64> {
    closes.iter().map(|&c| Bar::new(c, c, c)).collect()
}

/// The eight-bar high/low/close sample.
pub fn sample_bars() -> BarSeries<f64> {
    BarSeries::from_columns(&SAMPLE_HIGH[..], &SAMPLE_LOW[..], &SAMPLE_CLOSE[..])
        .expect("sample columns have equal length")
}

/// A deterministic wave long enough for every default period.
pub fn wave_bars(len: usize) -> BarSeries<f64> {
    (0..len)
        .map(|i| {
            let x = i as f64;
            let close = 100.0 + (x * 0.37).sin() * 4.0 + (x * 0.05).cos() * 2.0;
            Bar::new(close + 1.0 + (x * 0.9).sin().abs(), close - 1.0, close)
        })
        .collect()
}

/// Float comparison that treats NaN as equal to NaN.
pub fn assert_float_eq(actual: f64, expected: f64, epsilon: f64, context: &str) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "{context}: expected NaN but got {actual}");
        return;
    }
    assert!(!actual.is_nan(), "{context}: got NaN but expected {expected}");
    let diff = (actual - expected).abs();
    assert!(
        diff <= epsilon * expected.abs().max(1.0),
        "{context}: expected {expected} but got {actual} (diff: {diff})"
    );
}

/// Assert that exactly the first `warmup` positions are NaN.
pub fn assert_warmup(series: &Series<f64>, warmup: usize, context: &str) {
    for (i, &value) in series.iter().enumerate() {
        if i < warmup {
            assert!(value.is_nan(), "{context}: position {i} should be undefined, got {value}");
        } else {
            assert!(!value.is_nan(), "{context}: position {i} should be defined");
        }
    }
}
