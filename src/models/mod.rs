//! Forecasting strategies.

mod traits;

pub mod decomposition;
pub mod linear;
pub mod sarima;
pub mod smoothing;

pub use decomposition::{Frequency, TrendDecomposition};
pub use linear::LinearForecaster;
pub use sarima::{SarimaOrder, SeasonalArima};
pub use smoothing::ExponentialSmoothing;
pub use traits::{BoxedForecaster, Forecaster};
