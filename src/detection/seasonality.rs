//! Seasonality detection via the autocorrelation function.

use crate::utils::stats::{autocorrelation, mean};

/// Default maximum candidate period, suitable for monthly-style data.
pub const DEFAULT_MAX_PERIOD: usize = 12;

/// Autocorrelation a candidate lag must exceed to count as seasonal.
pub const ACF_THRESHOLD: f64 = 0.5;

/// Detect a dominant seasonal period in a series.
///
/// Scans lags 2..=`max_period` in increasing order and returns the first
/// lag whose autocorrelation exceeds [`ACF_THRESHOLD`]. This is a
/// first-significant-peak heuristic, not a global maximum search; when
/// several lags qualify, the earliest wins.
///
/// Returns `None` when the series is too short (< 2 × `max_period`) for a
/// reliable estimate, when the series has no variance, or when the ACF is
/// numerically degenerate. Detection is advisory and never errors.
pub fn detect_seasonality(series: &[f64], max_period: usize) -> Option<usize> {
    let n = series.len();
    if max_period < 2 || n < 2 * max_period {
        return None;
    }

    let m = mean(series);
    let variance: f64 = series.iter().map(|x| (x - m).powi(2)).sum::<f64>() / n as f64;
    if !variance.is_finite() || variance < 1e-10 {
        return None;
    }

    for lag in 2..=max_period {
        let acf = autocorrelation(series, lag);
        if acf.is_finite() && acf > ACF_THRESHOLD {
            return Some(lag);
        }
    }

    None
}

/// Detect seasonality with the default maximum period.
pub fn detect_seasonality_auto(series: &[f64]) -> Option<usize> {
    detect_seasonality(series, DEFAULT_MAX_PERIOD)
}
