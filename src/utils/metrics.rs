//! Forecast accuracy metrics.

use crate::error::{ForecastError, Result};

/// Accuracy metrics for evaluating forecast performance.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error.
    pub mae: f64,
    /// Root Mean Squared Error.
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent. Computed only over pairs
    /// whose actual value is non-zero; 0.0 when no such pair exists.
    pub mape: f64,
}

impl AccuracyMetrics {
    /// Metrics for an empty comparison.
    pub fn zero() -> Self {
        Self {
            mae: 0.0,
            rmse: 0.0,
            mape: 0.0,
        }
    }
}

/// Evaluate forecast accuracy on paired actual/predicted sequences.
///
/// # Errors
/// `DimensionMismatch` when the sequences differ in length. Empty input is
/// not an error and yields all-zero metrics.
pub fn evaluate_forecast_accuracy(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Ok(AccuracyMetrics::zero());
    }

    let n = actual.len() as f64;

    let mae: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / n;

    let rmse = (actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / n)
        .sqrt();

    // Percentage error is undefined against a zero actual; such pairs are
    // excluded, and a series with no non-zero actuals reports 0.0.
    let mut mape_sum = 0.0;
    let mut mape_count = 0usize;
    for (a, p) in actual.iter().zip(predicted.iter()) {
        if *a != 0.0 {
            mape_sum += ((a - p) / a).abs();
            mape_count += 1;
        }
    }
    let mape = if mape_count == 0 {
        0.0
    } else {
        100.0 * mape_sum / mape_count as f64
    };

    Ok(AccuracyMetrics { mae, rmse, mape })
}

/// MAE between two slices of equal length.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// RMSE between two slices of equal length.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    (actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64)
        .sqrt()
}
