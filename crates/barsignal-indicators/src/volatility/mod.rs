//! Volatility indicators.

mod bollinger;

pub use bollinger::{bollinger_bands, BollingerBands, BollingerConfig, BollingerOutput};
