//! Utility functions shared by the forecasting models.

pub mod metrics;
pub mod ols;
pub mod optimization;
pub mod stats;

pub use metrics::{evaluate_forecast_accuracy, mae, rmse, AccuracyMetrics};
pub use ols::{fit_least_squares, OlsFit};
pub use optimization::{nelder_mead, NelderMeadConfig, NelderMeadResult};
pub use stats::{autocorrelation, mean, quantile_normal, std_dev, variance, z_score};
