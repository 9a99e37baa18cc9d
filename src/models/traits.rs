//! Forecaster trait defining the common interface for all strategies.

use crate::core::{ForecastResult, TimeSeries};
use crate::error::{ForecastError, Result};

/// Common capability interface for all forecasting strategies.
///
/// Each strategy is a stateless value object: `fit_and_forecast` runs the
/// whole fit-then-predict pipeline for one series and returns a completed
/// [`ForecastResult`] or a typed failure. The trait is object-safe, so the
/// method selector can hold `Box<dyn Forecaster>` strategies.
pub trait Forecaster {
    /// Display name of the strategy.
    fn name(&self) -> &'static str;

    /// Fit the strategy to `series` and forecast `horizon` steps ahead with
    /// bounds at `confidence_level`.
    fn fit_and_forecast(
        &self,
        series: &TimeSeries,
        horizon: usize,
        confidence_level: f64,
    ) -> Result<ForecastResult>;
}

/// Type alias for boxed forecaster trait objects.
pub type BoxedForecaster = Box<dyn Forecaster + Send + Sync>;

/// Validate the horizon and confidence level shared by every strategy.
pub(crate) fn validate_request(horizon: usize, confidence_level: f64) -> Result<()> {
    if horizon == 0 {
        return Err(ForecastError::InvalidParameter(
            "horizon must be positive".into(),
        ));
    }
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(ForecastError::InvalidParameter(format!(
            "confidence level must be in (0, 1), got {confidence_level}"
        )));
    }
    Ok(())
}

/// Enforce a strategy's minimum sample size.
pub(crate) fn require_min_len(series: &TimeSeries, needed: usize) -> Result<()> {
    if series.len() < needed {
        return Err(ForecastError::InsufficientData {
            needed,
            got: series.len(),
        });
    }
    Ok(())
}
