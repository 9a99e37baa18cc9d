//! Holt-Winters exponential smoothing forecaster.

use crate::core::{ForecastMethod, ForecastResult, MethodMetadata, TimeSeries};
use crate::detection::{detect_seasonality, DEFAULT_MAX_PERIOD};
use crate::error::{ForecastError, Result};
use crate::models::traits::{require_min_len, validate_request, Forecaster};
use crate::utils::optimization::{nelder_mead, NelderMeadConfig};
use crate::utils::stats::z_score;

const PARAM_BOUNDS: (f64, f64) = (0.0001, 0.9999);

/// Exponential smoothing forecaster with an additive trend.
///
/// Always fits a trend component (Holt's linear method). An additive
/// seasonal component is added only when a seasonal period is supplied or
/// detected AND the series covers at least two full seasons. Smoothing
/// parameters are chosen by Nelder-Mead minimization of the in-sample sum
/// of squared errors; there is no manual parameter search.
///
/// Confidence bounds use the in-sample residual standard deviation and the
/// two-level z lookup shared with the linear forecaster, applied
/// symmetrically with constant width across the horizon.
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    seasonal_period: Option<usize>,
    max_period: usize,
}

impl ExponentialSmoothing {
    /// Create a forecaster that auto-detects the seasonal period.
    pub fn new() -> Self {
        Self {
            seasonal_period: None,
            max_period: DEFAULT_MAX_PERIOD,
        }
    }

    /// Create a forecaster with a known seasonal period.
    pub fn with_seasonal_period(period: usize) -> Self {
        Self {
            seasonal_period: Some(period),
            max_period: DEFAULT_MAX_PERIOD,
        }
    }
}

impl Default for ExponentialSmoothing {
    fn default() -> Self {
        Self::new()
    }
}

impl Forecaster for ExponentialSmoothing {
    fn name(&self) -> &'static str {
        "ExponentialSmoothing"
    }

    fn fit_and_forecast(
        &self,
        series: &TimeSeries,
        horizon: usize,
        confidence_level: f64,
    ) -> Result<ForecastResult> {
        validate_request(horizon, confidence_level)?;
        require_min_len(series, 8)?;

        let values = series.values();
        let n = values.len();

        // Seasonal component only when the period is known and the series
        // covers two full seasons.
        let period = self
            .seasonal_period
            .or_else(|| detect_seasonality(values, self.max_period))
            .filter(|&p| p > 1 && n >= 2 * p);

        let state = match period {
            Some(p) => SmoothingState::fit_seasonal(values, p)?,
            None => SmoothingState::fit_trend_only(values),
        };

        let point = state.predict(n, horizon);
        let half_width = z_score(confidence_level) * state.residual_std;
        let lower: Vec<f64> = point.iter().map(|p| p - half_width).collect();
        let upper: Vec<f64> = point.iter().map(|p| p + half_width).collect();

        ForecastResult::new(
            ForecastMethod::ExponentialSmoothing,
            point,
            lower,
            upper,
            confidence_level,
            MethodMetadata::ExponentialSmoothing {
                seasonal_period: period,
                seasonal: if period.is_some() { "additive" } else { "none" },
                aic: state.aic,
            },
        )
    }
}

/// Smoothed level/trend/seasonal state after fitting.
struct SmoothingState {
    level: f64,
    trend: f64,
    /// Seasonal indices; empty when no seasonal component.
    seasonals: Vec<f64>,
    residual_std: f64,
    aic: Option<f64>,
}

impl SmoothingState {
    /// Holt's linear method: optimize (alpha, beta) and run the recursion.
    fn fit_trend_only(values: &[f64]) -> Self {
        let result = nelder_mead(
            |params| trend_sse(values, params[0], params[1]),
            &[0.3, 0.1],
            Some(&[PARAM_BOUNDS, PARAM_BOUNDS]),
            &NelderMeadConfig::default(),
        );
        let alpha = result.optimal_point[0].clamp(PARAM_BOUNDS.0, PARAM_BOUNDS.1);
        let beta = result.optimal_point[1].clamp(PARAM_BOUNDS.0, PARAM_BOUNDS.1);
        tracing::debug!(alpha, beta, converged = result.converged, "holt fit");

        let (level, trend, sse, n_eff) = trend_recursion(values, alpha, beta);
        Self::from_fit(level, trend, Vec::new(), sse, n_eff, 2)
    }

    /// Holt-Winters with additive seasonality: optimize (alpha, beta, gamma).
    fn fit_seasonal(values: &[f64], period: usize) -> Result<Self> {
        if values.len() < 2 * period {
            return Err(ForecastError::InsufficientData {
                needed: 2 * period,
                got: values.len(),
            });
        }

        let result = nelder_mead(
            |params| seasonal_sse(values, period, params[0], params[1], params[2]),
            &[0.3, 0.1, 0.1],
            Some(&[PARAM_BOUNDS, PARAM_BOUNDS, PARAM_BOUNDS]),
            &NelderMeadConfig::default(),
        );
        let alpha = result.optimal_point[0].clamp(PARAM_BOUNDS.0, PARAM_BOUNDS.1);
        let beta = result.optimal_point[1].clamp(PARAM_BOUNDS.0, PARAM_BOUNDS.1);
        let gamma = result.optimal_point[2].clamp(PARAM_BOUNDS.0, PARAM_BOUNDS.1);
        tracing::debug!(
            alpha,
            beta,
            gamma,
            converged = result.converged,
            "holt-winters fit"
        );

        let (level, trend, seasonals, sse, n_eff) =
            seasonal_recursion(values, period, alpha, beta, gamma);
        Ok(Self::from_fit(level, trend, seasonals, sse, n_eff, 3))
    }

    fn from_fit(
        level: f64,
        trend: f64,
        seasonals: Vec<f64>,
        sse: f64,
        n_eff: usize,
        num_params: usize,
    ) -> Self {
        let variance = if n_eff > 0 { sse / n_eff as f64 } else { 0.0 };
        let residual_std = variance.max(0.0).sqrt();

        let aic = if n_eff > 0 && variance > 0.0 {
            let n = n_eff as f64;
            let ll = -0.5 * n * (1.0 + variance.ln() + (2.0 * std::f64::consts::PI).ln());
            Some(-2.0 * ll + 2.0 * num_params as f64)
        } else {
            None
        };

        Self {
            level,
            trend,
            seasonals,
            residual_std,
            aic,
        }
    }

    /// Forecast `horizon` steps past the end of a length-`n` series.
    fn predict(&self, n: usize, horizon: usize) -> Vec<f64> {
        (1..=horizon)
            .map(|h| {
                let base = self.level + h as f64 * self.trend;
                if self.seasonals.is_empty() {
                    base
                } else {
                    base + self.seasonals[(n + h - 1) % self.seasonals.len()]
                }
            })
            .collect()
    }
}

/// One pass of Holt's recursion; returns (level, trend, sse, effective n).
fn trend_recursion(values: &[f64], alpha: f64, beta: f64) -> (f64, f64, f64, usize) {
    let mut level = values[0];
    let mut trend = values[1] - values[0];
    let mut sse = 0.0;

    for &y in &values[1..] {
        let forecast = level + trend;
        let error = y - forecast;
        sse += error * error;

        let level_prev = level;
        level = alpha * y + (1.0 - alpha) * (level_prev + trend);
        trend = beta * (level - level_prev) + (1.0 - beta) * trend;
    }

    (level, trend, sse, values.len() - 1)
}

fn trend_sse(values: &[f64], alpha: f64, beta: f64) -> f64 {
    let (_, _, sse, _) = trend_recursion(values, alpha, beta);
    if sse.is_finite() {
        sse
    } else {
        f64::MAX
    }
}

/// Initial state from the first two seasons: level is the first-season
/// mean, trend the mean seasonal difference, seasonals the first-season
/// deviations normalized to sum to zero.
fn initial_seasonal_state(values: &[f64], period: usize) -> (f64, f64, Vec<f64>) {
    let level = values[..period].iter().sum::<f64>() / period as f64;

    let trend = (0..period)
        .map(|i| (values[period + i] - values[i]) / period as f64)
        .sum::<f64>()
        / period as f64;

    let mut seasonals: Vec<f64> = values[..period].iter().map(|y| y - level).collect();
    let adjustment = seasonals.iter().sum::<f64>() / period as f64;
    for s in seasonals.iter_mut() {
        *s -= adjustment;
    }

    (level, trend, seasonals)
}

/// One pass of the additive Holt-Winters recursion.
fn seasonal_recursion(
    values: &[f64],
    period: usize,
    alpha: f64,
    beta: f64,
    gamma: f64,
) -> (f64, f64, Vec<f64>, f64, usize) {
    let (mut level, mut trend, mut seasonals) = initial_seasonal_state(values, period);
    let mut sse = 0.0;

    for (t, &y) in values.iter().enumerate().skip(period) {
        let idx = t % period;
        let s = seasonals[idx];

        let forecast = level + trend + s;
        let error = y - forecast;
        sse += error * error;

        let level_prev = level;
        level = alpha * (y - s) + (1.0 - alpha) * (level_prev + trend);
        trend = beta * (level - level_prev) + (1.0 - beta) * trend;
        seasonals[idx] = gamma * (y - level) + (1.0 - gamma) * s;
    }

    (level, trend, seasonals, sse, values.len() - period)
}

fn seasonal_sse(values: &[f64], period: usize, alpha: f64, beta: f64, gamma: f64) -> f64 {
    let (_, _, _, sse, _) = seasonal_recursion(values, period, alpha, beta, gamma);
    if sse.is_finite() {
        sse
    } else {
        f64::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ts(values: &[f64]) -> TimeSeries {
        TimeSeries::from_slice(values).unwrap()
    }

    fn seasonal_series(n: usize, period: usize, trend: f64, amplitude: f64) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                let seasonal =
                    amplitude * (2.0 * std::f64::consts::PI * t / period as f64).sin();
                10.0 + trend * t + seasonal
            })
            .collect()
    }

    #[test]
    fn insufficient_data_is_rejected() {
        let result = ExponentialSmoothing::new().fit_and_forecast(&ts(&[1.0; 7]), 3, 0.95);
        assert!(matches!(
            result,
            Err(ForecastError::InsufficientData { needed: 8, got: 7 })
        ));
    }

    #[test]
    fn trend_only_fit_follows_trend() {
        // Noise-like residual on a trend keeps the detector quiet at small lags
        let values: Vec<f64> = (0..20)
            .map(|i| 5.0 + ((i * 37 + 11) % 23) as f64 * 0.1)
            .collect();
        let result = ExponentialSmoothing::new()
            .fit_and_forecast(&ts(&values), 4, 0.95)
            .unwrap();

        assert_eq!(result.horizon(), 4);
        match result.metadata() {
            MethodMetadata::ExponentialSmoothing {
                seasonal_period,
                seasonal,
                aic,
            } => {
                assert!(seasonal_period.is_none());
                assert_eq!(*seasonal, "none");
                assert!(aic.is_some());
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn seasonal_component_used_when_period_fits() {
        let values = seasonal_series(48, 12, 0.1, 5.0);
        let result = ExponentialSmoothing::with_seasonal_period(12)
            .fit_and_forecast(&ts(&values), 12, 0.95)
            .unwrap();

        match result.metadata() {
            MethodMetadata::ExponentialSmoothing {
                seasonal_period,
                seasonal,
                ..
            } => {
                assert_eq!(*seasonal_period, Some(12));
                assert_eq!(*seasonal, "additive");
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn seasonal_hint_ignored_when_series_too_short() {
        // Period 12 needs 24 observations; 16 falls back to trend-only
        let values = seasonal_series(16, 12, 0.1, 5.0);
        let result = ExponentialSmoothing::with_seasonal_period(12)
            .fit_and_forecast(&ts(&values), 4, 0.95)
            .unwrap();

        match result.metadata() {
            MethodMetadata::ExponentialSmoothing { seasonal, .. } => {
                assert_eq!(*seasonal, "none");
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn forecast_reflects_seasonal_pattern() {
        // Strong square-wave season, no trend
        let values: Vec<f64> = (0..32)
            .map(|i| if i % 4 < 2 { 20.0 } else { 10.0 })
            .collect();
        let result = ExponentialSmoothing::with_seasonal_period(4)
            .fit_and_forecast(&ts(&values), 4, 0.95)
            .unwrap();

        let preds = result.point();
        // The high/low alternation should survive into the forecast
        assert!(preds[0] > preds[2] || preds[1] > preds[3]);
    }

    #[test]
    fn bounds_are_constant_width_and_bracket_point() {
        let values = seasonal_series(40, 8, 0.2, 3.0);
        let result = ExponentialSmoothing::with_seasonal_period(8)
            .fit_and_forecast(&ts(&values), 10, 0.95)
            .unwrap();

        let (point, lower, upper) = (result.point(), result.lower_bound(), result.upper_bound());
        let width = upper[0] - lower[0];
        for i in 0..10 {
            assert!(lower[i] <= point[i] && point[i] <= upper[i]);
            assert_relative_eq!(upper[i] - lower[i], width, epsilon = 1e-9);
        }
    }

    #[test]
    fn wider_bounds_for_higher_confidence() {
        let values: Vec<f64> = (0..20)
            .map(|i| 5.0 + 0.5 * i as f64 + ((i * 37 + 11) % 23) as f64 * 0.05)
            .collect();
        let model = ExponentialSmoothing::new();

        let r95 = model.fit_and_forecast(&ts(&values), 3, 0.95).unwrap();
        let r99 = model.fit_and_forecast(&ts(&values), 3, 0.99).unwrap();

        let w95 = r95.upper_bound()[0] - r95.lower_bound()[0];
        let w99 = r99.upper_bound()[0] - r99.lower_bound()[0];
        assert!(w99 >= w95);
    }

    #[test]
    fn trend_recursion_tracks_linear_series() {
        let values: Vec<f64> = (0..20).map(|i| 2.0 * i as f64).collect();
        let (level, trend, sse, _) = trend_recursion(&values, 0.8, 0.5);

        // A clean line is tracked almost exactly
        assert_relative_eq!(trend, 2.0, epsilon = 0.2);
        assert!(level > 30.0);
        assert!(sse < 10.0);
    }

    #[test]
    fn initial_seasonal_state_sums_to_zero() {
        let values = seasonal_series(24, 6, 0.1, 4.0);
        let (_, _, seasonals) = initial_seasonal_state(&values, 6);

        assert_eq!(seasonals.len(), 6);
        let sum: f64 = seasonals.iter().sum();
        assert_relative_eq!(sum, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn horizon_invariant_across_sizes() {
        let values = seasonal_series(30, 6, 0.1, 2.0);
        let model = ExponentialSmoothing::new();
        for horizon in [1, 3, 12] {
            let result = model.fit_and_forecast(&ts(&values), horizon, 0.95).unwrap();
            assert_eq!(result.horizon(), horizon);
        }
    }
}
