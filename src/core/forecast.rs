//! Forecast result structures.

use crate::error::{ForecastError, Result};

/// Which forecasting method produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastMethod {
    /// OLS linear projection with analytic prediction intervals.
    Linear,
    /// Seasonal ARIMA with heuristically chosen orders.
    Sarima,
    /// Holt-Winters exponential smoothing (additive trend).
    ExponentialSmoothing,
    /// Trend + Fourier-seasonality decomposition over a synthetic calendar.
    TrendDecomposition,
}

impl ForecastMethod {
    /// Stable identifier for logs and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::Linear => "linear_regression",
            ForecastMethod::Sarima => "sarima",
            ForecastMethod::ExponentialSmoothing => "exponential_smoothing",
            ForecastMethod::TrendDecomposition => "trend_decomposition",
        }
    }
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method-specific fit diagnostics carried alongside a forecast.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodMetadata {
    /// OLS fit diagnostics.
    Linear {
        slope: f64,
        intercept: f64,
        r_squared: f64,
        residual_std_error: f64,
    },
    /// SARIMA order and fit score.
    Sarima {
        /// Non-seasonal (p, d, q).
        order: (usize, usize, usize),
        /// Seasonal (P, D, Q, s); all zero when no seasonal component.
        seasonal_order: (usize, usize, usize, usize),
        /// Period actually used, if any.
        seasonal_period: Option<usize>,
        aic: Option<f64>,
    },
    /// Exponential smoothing configuration and fit score.
    ExponentialSmoothing {
        seasonal_period: Option<usize>,
        /// "additive" or "none".
        seasonal: &'static str,
        aic: Option<f64>,
    },
    /// Decomposition summary.
    TrendDecomposition {
        /// Mean of the trend component over the forecast horizon.
        mean_trend: f64,
    },
}

/// A point forecast with confidence bounds and fit metadata.
///
/// Invariants, checked at construction: all three sequences share one
/// length (the horizon) and `lower[i] <= point[i] <= upper[i]` for all i.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    method: ForecastMethod,
    point: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
    confidence_level: f64,
    metadata: MethodMetadata,
    selection_rationale: Option<String>,
}

impl ForecastResult {
    /// Assemble a forecast result, validating the bound invariants.
    pub fn new(
        method: ForecastMethod,
        point: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
        confidence_level: f64,
        metadata: MethodMetadata,
    ) -> Result<Self> {
        if lower.len() != point.len() || upper.len() != point.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: point.len(),
                got: lower.len().min(upper.len()),
            });
        }
        for i in 0..point.len() {
            if !point[i].is_finite() || !lower[i].is_finite() || !upper[i].is_finite() {
                return Err(ForecastError::ComputationError(format!(
                    "non-finite forecast value at step {i}"
                )));
            }
            if lower[i] > point[i] || point[i] > upper[i] {
                return Err(ForecastError::ComputationError(format!(
                    "bounds out of order at step {i}"
                )));
            }
        }
        Ok(Self {
            method,
            point,
            lower,
            upper,
            confidence_level,
            metadata,
            selection_rationale: None,
        })
    }

    /// Attach the selector's rationale.
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.selection_rationale = Some(rationale.into());
        self
    }

    /// The method that produced this forecast.
    pub fn method(&self) -> ForecastMethod {
        self.method
    }

    /// Point predictions, one per forecast step.
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Lower confidence bounds.
    pub fn lower_bound(&self) -> &[f64] {
        &self.lower
    }

    /// Upper confidence bounds.
    pub fn upper_bound(&self) -> &[f64] {
        &self.upper
    }

    /// Confidence level of the bounds, in (0, 1).
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Method-specific fit diagnostics.
    pub fn metadata(&self) -> &MethodMetadata {
        &self.metadata
    }

    /// Rationale set by the method selector, absent for direct calls.
    pub fn selection_rationale(&self) -> Option<&str> {
        self.selection_rationale.as_deref()
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.point.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_metadata() -> MethodMetadata {
        MethodMetadata::Linear {
            slope: 1.0,
            intercept: 0.0,
            r_squared: 1.0,
            residual_std_error: 0.0,
        }
    }

    #[test]
    fn construction_and_accessors() {
        let result = ForecastResult::new(
            ForecastMethod::Linear,
            vec![2.0, 3.0],
            vec![1.0, 2.0],
            vec![3.0, 4.0],
            0.95,
            linear_metadata(),
        )
        .unwrap();

        assert_eq!(result.method(), ForecastMethod::Linear);
        assert_eq!(result.horizon(), 2);
        assert_eq!(result.point(), &[2.0, 3.0]);
        assert_eq!(result.lower_bound(), &[1.0, 2.0]);
        assert_eq!(result.upper_bound(), &[3.0, 4.0]);
        assert_eq!(result.confidence_level(), 0.95);
        assert!(result.selection_rationale().is_none());
    }

    #[test]
    fn rationale_is_attached_by_builder() {
        let result = ForecastResult::new(
            ForecastMethod::Linear,
            vec![1.0],
            vec![1.0],
            vec![1.0],
            0.95,
            linear_metadata(),
        )
        .unwrap()
        .with_rationale("fallback method");

        assert_eq!(result.selection_rationale(), Some("fallback method"));
    }

    #[test]
    fn rejects_mismatched_bound_lengths() {
        let result = ForecastResult::new(
            ForecastMethod::Linear,
            vec![1.0, 2.0],
            vec![1.0],
            vec![2.0, 3.0],
            0.95,
            linear_metadata(),
        );
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn rejects_out_of_order_bounds() {
        let result = ForecastResult::new(
            ForecastMethod::Linear,
            vec![1.0],
            vec![2.0],
            vec![3.0],
            0.95,
            linear_metadata(),
        );
        assert!(matches!(result, Err(ForecastError::ComputationError(_))));
    }

    #[test]
    fn rejects_non_finite_values() {
        let result = ForecastResult::new(
            ForecastMethod::Linear,
            vec![f64::NAN],
            vec![0.0],
            vec![1.0],
            0.95,
            linear_metadata(),
        );
        assert!(matches!(result, Err(ForecastError::ComputationError(_))));
    }

    #[test]
    fn zero_width_bounds_are_valid() {
        let result = ForecastResult::new(
            ForecastMethod::Linear,
            vec![5.0, 5.0],
            vec![5.0, 5.0],
            vec![5.0, 5.0],
            0.95,
            linear_metadata(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn method_names_are_stable() {
        assert_eq!(ForecastMethod::Linear.as_str(), "linear_regression");
        assert_eq!(ForecastMethod::Sarima.as_str(), "sarima");
        assert_eq!(
            ForecastMethod::ExponentialSmoothing.as_str(),
            "exponential_smoothing"
        );
        assert_eq!(
            ForecastMethod::TrendDecomposition.as_str(),
            "trend_decomposition"
        );
    }
}
