//! Core data structures for forecasting.

mod forecast;
mod series;

pub use forecast::{ForecastMethod, ForecastResult, MethodMetadata};
pub use series::TimeSeries;
