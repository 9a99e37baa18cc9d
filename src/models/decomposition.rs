//! Trend + seasonality decomposition forecaster over a synthetic calendar.

use chrono::{DateTime, Duration, Months, TimeZone, Utc};

use crate::core::{ForecastMethod, ForecastResult, MethodMetadata, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::traits::{require_min_len, validate_request, Forecaster};
use crate::utils::ols::fit_least_squares;
use crate::utils::stats::{mean, quantile_normal};

/// Observation frequency of the synthetic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frequency {
    /// One observation per hour.
    Hourly,
    /// One observation per day.
    #[default]
    Daily,
    /// One observation per week.
    Weekly,
    /// One observation per calendar month.
    Monthly,
}

const DAYS_PER_YEAR: f64 = 365.25;
const DAYS_PER_WEEK: f64 = 7.0;
const FOURIER_ORDER: usize = 3;

/// Decomposition forecaster in the style of additive-regression trend
/// models: a linear trend over a synthetic calendar with multiplicative
/// Fourier seasonality.
///
/// The calendar starts at a fixed reference date — only the relative
/// spacing matters — and advances at the configured frequency. Yearly
/// seasonality is always fitted; weekly seasonality only for daily data;
/// intra-day seasonality never.
///
/// This strategy is intentionally excluded from the automatic selection
/// chain and remains directly callable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendDecomposition {
    frequency: Frequency,
}

impl TrendDecomposition {
    /// Create a forecaster over a daily calendar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecaster with an explicit calendar frequency.
    pub fn with_frequency(frequency: Frequency) -> Self {
        Self { frequency }
    }

    fn reference_date() -> Result<DateTime<Utc>> {
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| ForecastError::ComputationError("invalid reference date".into()))
    }

    /// Fractional days since the reference date for calendar step `i`.
    fn day_offset(&self, reference: DateTime<Utc>, step: usize) -> Result<f64> {
        let timestamp = match self.frequency {
            Frequency::Hourly => reference + Duration::hours(step as i64),
            Frequency::Daily => reference + Duration::days(step as i64),
            Frequency::Weekly => reference + Duration::weeks(step as i64),
            Frequency::Monthly => reference
                .checked_add_months(Months::new(step as u32))
                .ok_or_else(|| {
                    ForecastError::ComputationError("calendar overflow".into())
                })?,
        };
        Ok((timestamp - reference).num_seconds() as f64 / 86_400.0)
    }

    /// Fourier design row for one calendar position.
    fn seasonal_row(&self, t: f64) -> Vec<f64> {
        let mut row = Vec::with_capacity(2 * FOURIER_ORDER * 2);
        for k in 1..=FOURIER_ORDER {
            let angle = 2.0 * std::f64::consts::PI * k as f64 * t / DAYS_PER_YEAR;
            row.push(angle.sin());
            row.push(angle.cos());
        }
        if self.frequency == Frequency::Daily {
            for k in 1..=FOURIER_ORDER {
                let angle = 2.0 * std::f64::consts::PI * k as f64 * t / DAYS_PER_WEEK;
                row.push(angle.sin());
                row.push(angle.cos());
            }
        }
        row
    }
}

impl Forecaster for TrendDecomposition {
    fn name(&self) -> &'static str {
        "TrendDecomposition"
    }

    fn fit_and_forecast(
        &self,
        series: &TimeSeries,
        horizon: usize,
        confidence_level: f64,
    ) -> Result<ForecastResult> {
        validate_request(horizon, confidence_level)?;
        require_min_len(series, 10)?;

        let values = series.values();
        let n = values.len();
        let reference = Self::reference_date()?;

        let offsets: Vec<f64> = (0..n + horizon)
            .map(|i| self.day_offset(reference, i))
            .collect::<Result<_>>()?;

        // Linear trend over the calendar.
        let trend_rows: Vec<Vec<f64>> = offsets[..n].iter().map(|&t| vec![1.0, t]).collect();
        let trend_fit = fit_least_squares(&trend_rows, values)
            .map_err(|e| ForecastError::FitFailure(format!("trend regression failed: {e}")))?;
        let trend: Vec<f64> = offsets
            .iter()
            .map(|&t| trend_fit.predict_row(&[1.0, t]))
            .collect();

        // Multiplicative seasonality needs a trend bounded away from zero.
        if trend[..n + horizon].iter().any(|g| g.abs() < 1e-6) {
            return Err(ForecastError::FitFailure(
                "trend passes through zero; multiplicative seasonality is undefined".into(),
            ));
        }

        // Fourier fit on the detrended ratio.
        let ratio: Vec<f64> = values
            .iter()
            .zip(trend.iter())
            .map(|(y, g)| y / g - 1.0)
            .collect();
        let seasonal_rows: Vec<Vec<f64>> =
            offsets[..n].iter().map(|&t| self.seasonal_row(t)).collect();
        let seasonal_fit = fit_least_squares(&seasonal_rows, &ratio)
            .map_err(|e| ForecastError::FitFailure(format!("seasonal regression failed: {e}")))?;

        // In-sample residuals on the original scale.
        let residual_std = {
            let sse: f64 = (0..n)
                .map(|i| {
                    let fitted =
                        trend[i] * (1.0 + seasonal_fit.predict_row(&seasonal_rows[i]));
                    (values[i] - fitted).powi(2)
                })
                .sum();
            (sse / n as f64).sqrt()
        };

        let z = quantile_normal((1.0 + confidence_level) / 2.0);
        let half_width = z * residual_std;

        let mut point = Vec::with_capacity(horizon);
        for i in n..n + horizon {
            let seasonal = seasonal_fit.predict_row(&self.seasonal_row(offsets[i]));
            point.push(trend[i] * (1.0 + seasonal));
        }
        let lower: Vec<f64> = point.iter().map(|p| p - half_width).collect();
        let upper: Vec<f64> = point.iter().map(|p| p + half_width).collect();

        let mean_trend = mean(&trend[n..n + horizon]);

        ForecastResult::new(
            ForecastMethod::TrendDecomposition,
            point,
            lower,
            upper,
            confidence_level,
            MethodMetadata::TrendDecomposition { mean_trend },
        )
    }
}
