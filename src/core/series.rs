//! Time series value object.

use crate::error::{ForecastError, Result};

/// An ordered, equally spaced sequence of finite observations.
///
/// The index 0..n-1 implicitly represents time order; there is no
/// missing-value representation, so callers must pre-clean their data.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from raw observations.
    ///
    /// # Errors
    /// `EmptyData` for an empty input; `InvalidParameter` when any
    /// observation is NaN or infinite.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidParameter(format!(
                "non-finite observation at index {pos}"
            )));
        }
        Ok(Self { values })
    }

    /// Create a series by copying a slice.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// The observations in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations (always ≥ 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty input. Kept for idiomatic
    /// pairing with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recent observation.
    pub fn last(&self) -> f64 {
        // Non-empty by construction
        self.values[self.values.len() - 1]
    }

    /// Arithmetic mean of the observations.
    pub fn mean(&self) -> f64 {
        crate::utils::stats::mean(&self.values)
    }
}

impl TryFrom<Vec<f64>> for TimeSeries {
    type Error = ForecastError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for TimeSeries {
    type Error = ForecastError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}
