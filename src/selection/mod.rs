//! Automatic forecast method selection.
//!
//! Implements a fixed priority/fallback policy: prefer the most expressive
//! model the data supports, degrade gracefully otherwise. The thresholds
//! (10 points for model-based methods, 8 for smoothing, two full seasons
//! for SARIMA) and the attempt order are part of the contract.

use tracing::{debug, warn};

use crate::core::{ForecastResult, TimeSeries};
use crate::detection::{detect_seasonality, DEFAULT_MAX_PERIOD};
use crate::error::Result;
use crate::models::{ExponentialSmoothing, Forecaster, LinearForecaster, SeasonalArima};

/// Rationale attached when the series is too short for model fitting.
pub const RATIONALE_TOO_FEW_POINTS: &str = "too few points";
/// Rationale attached when SARIMA is selected for a seasonal series.
pub const RATIONALE_SEASONAL: &str = "seasonal pattern detected";
/// Rationale attached when exponential smoothing is selected.
pub const RATIONALE_TREND_SEASONALITY: &str = "trend + seasonality";
/// Rationale attached when everything else failed and linear is used.
pub const RATIONALE_FALLBACK: &str = "fallback method";

/// Minimum series length before model-based methods are considered.
const MIN_LEN_MODEL_BASED: usize = 10;
/// Minimum series length for the smoothing attempt.
const MIN_LEN_SMOOTHING: usize = 8;

/// Chooses a forecasting strategy based on series length and detected
/// seasonality, with ordered fallback on fit failures.
///
/// Failures of the SARIMA and smoothing attempts are caught, logged, and
/// treated as "try the next method"; errors from the final linear fallback
/// propagate, since by construction that path only runs with enough data.
#[derive(Debug, Clone)]
pub struct MethodSelector {
    max_period: usize,
}

impl MethodSelector {
    /// Create a selector with the default seasonality search window.
    pub fn new() -> Self {
        Self {
            max_period: DEFAULT_MAX_PERIOD,
        }
    }

    /// Create a selector with a custom maximum seasonal period.
    pub fn with_max_period(max_period: usize) -> Self {
        Self { max_period }
    }

    /// Select a method and forecast. The returned result always carries a
    /// selection rationale.
    pub fn auto_select(
        &self,
        series: &TimeSeries,
        horizon: usize,
        confidence_level: f64,
    ) -> Result<ForecastResult> {
        let n = series.len();

        if n < MIN_LEN_MODEL_BASED {
            debug!(n, "series below model-fitting minimum, using linear trend");
            return LinearForecaster::new()
                .fit_and_forecast(series, horizon, confidence_level)
                .map(|r| r.with_rationale(RATIONALE_TOO_FEW_POINTS));
        }

        let period = detect_seasonality(series.values(), self.max_period);

        if let Some(p) = period {
            if n >= 2 * p {
                match SeasonalArima::with_seasonal_period(p).fit_and_forecast(
                    series,
                    horizon,
                    confidence_level,
                ) {
                    Ok(result) => {
                        debug!(period = p, "selected seasonal ARIMA");
                        return Ok(result.with_rationale(RATIONALE_SEASONAL));
                    }
                    Err(error) => {
                        warn!(%error, period = p, "SARIMA attempt failed, falling back");
                    }
                }
            }
        }

        if n >= MIN_LEN_SMOOTHING {
            let smoother = match period {
                Some(p) => ExponentialSmoothing::with_seasonal_period(p),
                None => ExponentialSmoothing::new(),
            };
            match smoother.fit_and_forecast(series, horizon, confidence_level) {
                Ok(result) => {
                    debug!(?period, "selected exponential smoothing");
                    return Ok(result.with_rationale(RATIONALE_TREND_SEASONALITY));
                }
                Err(error) => {
                    warn!(%error, "exponential smoothing attempt failed, falling back");
                }
            }
        }

        LinearForecaster::new()
            .fit_and_forecast(series, horizon, confidence_level)
            .map(|r| r.with_rationale(RATIONALE_FALLBACK))
    }
}

impl Default for MethodSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Select a method automatically and forecast `horizon` steps ahead.
///
/// Convenience entry point over [`MethodSelector`] for slice inputs.
pub fn auto_select_forecast_method(
    values: &[f64],
    horizon: usize,
    confidence_level: f64,
) -> Result<ForecastResult> {
    let series = TimeSeries::from_slice(values)?;
    MethodSelector::new().auto_select(&series, horizon, confidence_level)
}
