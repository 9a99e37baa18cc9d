//! Linear trend projection with analytic prediction intervals.

use crate::core::{ForecastMethod, ForecastResult, MethodMetadata, TimeSeries};
use crate::error::Result;
use crate::models::traits::{require_min_len, validate_request, Forecaster};
use crate::utils::stats::z_score;

/// Ordinary-least-squares trend forecaster.
///
/// Fits value against the integer index and extrapolates the line, with
/// classical prediction intervals from the residual standard error:
/// `se(step) = s * sqrt(1 + 1/n + (x_f - x̄)² / Σ(x_i - x̄)²)`.
///
/// Always available; the method selector uses it as the universal fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearForecaster;

impl LinearForecaster {
    /// Create a linear forecaster.
    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for LinearForecaster {
    fn name(&self) -> &'static str {
        "LinearRegression"
    }

    fn fit_and_forecast(
        &self,
        series: &TimeSeries,
        horizon: usize,
        confidence_level: f64,
    ) -> Result<ForecastResult> {
        validate_request(horizon, confidence_level)?;
        require_min_len(series, 2)?;

        let values = series.values();
        let n = values.len();
        let nf = n as f64;

        let x_mean = (nf - 1.0) / 2.0;
        let y_mean = series.mean();

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            sxx += dx * dx;
            sxy += dx * (y - y_mean);
        }

        // Singular design degrades to a flat forecast instead of a
        // division by zero.
        if sxx < 1e-12 {
            let last = series.last();
            let flat = vec![last; horizon];
            return ForecastResult::new(
                ForecastMethod::Linear,
                flat.clone(),
                flat.clone(),
                flat,
                confidence_level,
                MethodMetadata::Linear {
                    slope: 0.0,
                    intercept: last,
                    r_squared: 1.0,
                    residual_std_error: 0.0,
                },
            );
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let mut rss = 0.0;
        let mut sst = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let fitted = intercept + slope * i as f64;
            rss += (y - fitted).powi(2);
            sst += (y - y_mean).powi(2);
        }

        let r_squared = if sst == 0.0 { 1.0 } else { 1.0 - rss / sst };
        let residual_std_error = if n > 2 { (rss / (nf - 2.0)).sqrt() } else { 0.0 };

        let z = z_score(confidence_level);
        let mut point = Vec::with_capacity(horizon);
        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);

        for step in 0..horizon {
            let x_future = (n + step) as f64;
            let predicted = intercept + slope * x_future;
            let se = residual_std_error
                * (1.0 + 1.0 / nf + (x_future - x_mean).powi(2) / sxx).sqrt();
            point.push(predicted);
            lower.push(predicted - z * se);
            upper.push(predicted + z * se);
        }

        ForecastResult::new(
            ForecastMethod::Linear,
            point,
            lower,
            upper,
            confidence_level,
            MethodMetadata::Linear {
                slope,
                intercept,
                r_squared,
                residual_std_error,
            },
        )
    }
}
