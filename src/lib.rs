//! # autoforecast
//!
//! Time series forecasting engine with automatic model selection.
//!
//! Provides four forecasting strategies - seasonal ARIMA, Holt-Winters
//! exponential smoothing, trend decomposition over a synthetic calendar,
//! and OLS linear projection with analytic prediction intervals - plus
//! ACF-based seasonality detection, a priority/fallback method selector,
//! and forecast accuracy evaluation.
//!
//! ```
//! use autoforecast::prelude::*;
//!
//! let values: Vec<f64> = (0..30).map(|i| 10.0 + 0.5 * i as f64).collect();
//! let result = auto_select_forecast_method(&values, 6, 0.95).unwrap();
//!
//! assert_eq!(result.horizon(), 6);
//! assert!(result.selection_rationale().is_some());
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod detection;
pub mod error;
pub mod models;
pub mod selection;
pub mod utils;
pub mod validation;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ForecastMethod, ForecastResult, MethodMetadata, TimeSeries};
    pub use crate::detection::detect_seasonality;
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{
        ExponentialSmoothing, Forecaster, LinearForecaster, SeasonalArima, TrendDecomposition,
    };
    pub use crate::selection::{auto_select_forecast_method, MethodSelector};
    pub use crate::utils::{evaluate_forecast_accuracy, AccuracyMetrics};
}
