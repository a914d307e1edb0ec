//! Property-based tests for barsignal-indicators.
//!
//! These tests verify invariants that must hold for all inputs.

mod common;

use barsignal_core::{Bar, BarSeries};
use barsignal_indicators::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Generate a valid close price (positive, finite).
fn valid_price() -> impl Strategy<Value = f64> {
    (0.01f64..10000.0).prop_filter("must be finite", |x| x.is_finite())
}

/// Generate a bar around a close, with the close inside the high-low range.
fn valid_bar() -> impl Strategy<Value = Bar<f64>> {
    (valid_price(), 0.0f64..=1.0, 0.001f64..0.1).prop_map(|(close, position, spread)| {
        let range = close * spread;
        let low = close - range * position;
        let high = low + range;
        Bar::new(high, low, close)
    })
}

/// Generate a bar series of the given length range.
fn valid_bar_series(min_len: usize, max_len: usize) -> impl Strategy<Value = BarSeries<f64>> {
    prop::collection::vec(valid_bar(), min_len..=max_len)
        .prop_map(|bars| bars.into_iter().collect())
}

/// Generate a constant price series.
fn constant_price_series(len: usize) -> impl Strategy<Value = BarSeries<f64>> {
    valid_price().prop_map(move |price| (0..len).map(|_| Bar::new(price, price, price)).collect())
}

// ============================================================================
// Alignment
// ============================================================================

proptest! {
    /// Every column of every indicator has the input's length.
    #[test]
    fn outputs_align_with_input(
        bars in valid_bar_series(1, 60),
        window in 1usize..=30,
    ) {
        let specs: Vec<IndicatorSpec> = vec![
            SmaConfig::new(window).into(),
            EmaConfig::new(window).into(),
            BollingerConfig::new(window).into(),
            RsiConfig::new(window).into(),
            StochasticConfig::new(window, 3).into(),
            MacdConfig::default().into(),
            AdxConfig::new(window).into(),
            AroonConfig::new(window).into(),
        ];
        let frame = compute_all(&bars, &specs).unwrap();
        prop_assert_eq!(frame.len(), bars.len());
        prop_assert_eq!(frame.column_count(), 16);
    }

    /// SMA is undefined on exactly the first window - 1 positions.
    #[test]
    fn sma_warmup_is_exact(
        bars in valid_bar_series(1, 50),
        window in 1usize..=20,
    ) {
        let result = sma(&bars, window).unwrap().sma;
        for (i, &value) in result.iter().enumerate() {
            prop_assert_eq!(value.is_nan(), i + 1 < window, "index {}", i);
        }
    }

    /// RSI is undefined on exactly the first period positions.
    #[test]
    fn rsi_warmup_is_exact(
        bars in valid_bar_series(1, 50),
        period in 1usize..=20,
    ) {
        let result = rsi(&bars, period).unwrap();
        for i in 0..bars.len().min(period) {
            prop_assert!(result.rsi[i].is_nan(), "index {} should be undefined", i);
        }
        for i in period..bars.len() {
            prop_assert!(!result.avg_gain[i].is_nan());
            prop_assert!(!result.avg_loss[i].is_nan());
        }
    }
}

// ============================================================================
// SMA / EMA
// ============================================================================

proptest! {
    /// SMA of constant series should equal the constant.
    #[test]
    fn sma_constant_equals_input(
        bars in constant_price_series(20),
        window in 2usize..=10,
    ) {
        let price = bars.close()[0];
        let result = sma(&bars, window).unwrap().sma;
        for (i, &val) in result.iter().enumerate().skip(window - 1) {
            let diff = (val - price).abs();
            prop_assert!(diff < 1e-9 * price.max(1.0), "SMA of constant at index {}: {} vs {}", i, val, price);
        }
    }

    /// EMA starts at the first close and moves strictly toward each new close.
    #[test]
    fn ema_is_gapless_and_convex(
        bars in valid_bar_series(2, 40),
        window in 2usize..=15,
    ) {
        let close = bars.close();
        let result = ema(&bars, window).unwrap().ema;
        prop_assert_eq!(result[0], close[0]);

        for i in 1..bars.len() {
            let (prev, x, e) = (result[i - 1], close[i], result[i]);
            let tol = 1e-12 * prev.abs().max(x.abs());
            prop_assert!(e >= prev.min(x) - tol && e <= prev.max(x) + tol, "EMA[{}] = {} outside [{}, {}]", i, e, prev, x);
            if (x - prev).abs() > 1e-6 * prev.abs() {
                prop_assert!(e != prev && e != x, "EMA[{}] = {} not strictly between {} and {}", i, e, prev, x);
            }
        }
    }
}

// ============================================================================
// Oscillators and bands
// ============================================================================

proptest! {
    /// RSI stays within 0..=100 wherever it is defined.
    #[test]
    fn rsi_is_bounded(
        bars in valid_bar_series(15, 60),
        period in 2usize..=14,
    ) {
        let result = rsi(&bars, period).unwrap().rsi;
        for (i, &val) in result.iter().enumerate() {
            if !val.is_nan() {
                prop_assert!((0.0..=100.0).contains(&val), "RSI[{}] = {}", i, val);
            }
        }
    }

    /// %K lies in 0..=100 wherever the window has a range.
    #[test]
    fn stochastic_k_is_bounded(
        bars in valid_bar_series(5, 60),
        period in 1usize..=14,
    ) {
        let result = stochastic(&bars, period, 3).unwrap();
        for (i, &k) in result.k.iter().enumerate().skip(period - 1) {
            prop_assert!((-1e-9..=100.0 + 1e-9).contains(&k), "%K[{}] = {}", i, k);
        }
    }

    /// Upper >= Middle >= Lower wherever defined.
    #[test]
    fn bollinger_bands_are_ordered(
        bars in valid_bar_series(2, 60),
        period in 2usize..=20,
    ) {
        let result = bollinger_bands(&bars, period).unwrap();
        for i in 0..bars.len() {
            if !result.middle[i].is_nan() {
                prop_assert!(result.upper[i] >= result.middle[i]);
                prop_assert!(result.middle[i] >= result.lower[i]);
            }
        }
    }

    /// Aroon values are multiples of 100 / period in (0, 100].
    #[test]
    fn aroon_is_bounded(
        bars in valid_bar_series(1, 60),
        period in 1usize..=25,
    ) {
        let result = aroon(&bars, period).unwrap();
        for series in [&result.up, &result.down] {
            for &val in series.iter().filter(|v| !v.is_nan()) {
                prop_assert!(val > 0.0 && val <= 100.0 + 1e-9, "Aroon = {}", val);
            }
        }
    }

    /// Histogram is exactly MACD minus Signal.
    #[test]
    fn macd_histogram_is_exact(
        bars in valid_bar_series(1, 80),
        fast in 1usize..=20,
        slow in 1usize..=40,
        signal in 1usize..=15,
    ) {
        let result = macd(&bars, fast, slow, signal).unwrap();
        for i in 0..bars.len() {
            prop_assert_eq!(result.histogram[i], result.macd[i] - result.signal[i]);
        }
    }
}

// ============================================================================
// Purity
// ============================================================================

proptest! {
    /// Identical inputs give bit-identical frames.
    #[test]
    fn indicators_are_idempotent(bars in valid_bar_series(1, 50)) {
        let specs: Vec<IndicatorSpec> = vec![
            RsiConfig::default().into(),
            MacdConfig::default().into(),
            AdxConfig::default().into(),
            StochasticConfig::default().into(),
        ];
        let first = compute_all(&bars, &specs).unwrap();
        let second = compute_all(&bars, &specs).unwrap();
        prop_assert!(first.bit_eq(&second));
    }
}
