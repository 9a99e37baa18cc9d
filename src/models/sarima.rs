//! Seasonal ARIMA forecaster with heuristic order selection.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::core::{ForecastMethod, ForecastResult, MethodMetadata, TimeSeries};
use crate::detection::{detect_seasonality, DEFAULT_MAX_PERIOD};
use crate::error::{ForecastError, Result};
use crate::models::traits::{require_min_len, validate_request, Forecaster};
use crate::utils::optimization::{nelder_mead, NelderMeadConfig};
use crate::utils::stats::mean;
use crate::validation::adf_test;

/// Full SARIMA order: (p, d, q)(P, D, Q)[s].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SarimaOrder {
    /// Non-seasonal AR order.
    pub p: usize,
    /// Non-seasonal differencing order.
    pub d: usize,
    /// Non-seasonal MA order.
    pub q: usize,
    /// Seasonal AR order.
    pub cap_p: usize,
    /// Seasonal differencing order.
    pub cap_d: usize,
    /// Seasonal MA order.
    pub cap_q: usize,
    /// Seasonal period (0 for non-seasonal).
    pub s: usize,
}

impl SarimaOrder {
    /// Check if this order has a seasonal component.
    pub fn is_seasonal(&self) -> bool {
        self.s > 1 && (self.cap_p > 0 || self.cap_d > 0 || self.cap_q > 0)
    }

    /// Number of estimated parameters (intercept + all coefficients).
    pub fn num_params(&self) -> usize {
        1 + self.p + self.q + self.cap_p + self.cap_q
    }
}

/// Seasonal ARIMA forecaster.
///
/// Orders are chosen heuristically, not by grid search: an augmented
/// Dickey-Fuller test picks `d` (0 when stationary, 1 otherwise), `p` and
/// `q` are fixed at 1, and a supplied or auto-detected seasonal period > 1
/// adds a (1,1,1)[s] seasonal component. Coefficients are estimated by
/// conditional least squares with loose (-0.99, 0.99) bounds; boundary
/// solutions are accepted rather than rejected, so stationarity and
/// invertibility are not enforced.
///
/// Prediction intervals come from the fitted model's ψ-weight expansion and
/// widen with the horizon, unlike the fixed-width approximations used by
/// the linear and smoothing forecasters.
#[derive(Debug, Clone)]
pub struct SeasonalArima {
    seasonal_period: Option<usize>,
    max_period: usize,
}

impl SeasonalArima {
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

    /// Resolve the seasonal period: explicit hint first, detector second.
    fn resolve_period(&self, values: &[f64]) -> Option<usize> {
        self.seasonal_period
            .or_else(|| detect_seasonality(values, self.max_period))
            .filter(|&p| p > 1)
    }
}

impl Default for SeasonalArima {
    fn default() -> Self {
        Self::new()
    }
}

impl Forecaster for SeasonalArima {
    fn name(&self) -> &'static str {
        "SARIMA"
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
        let period = self.resolve_period(values);

        let stationary = adf_test(values, None).is_stationary;
        let order = SarimaOrder {
            p: 1,
            d: if stationary { 0 } else { 1 },
            q: 1,
            cap_p: if period.is_some() { 1 } else { 0 },
            cap_d: if period.is_some() { 1 } else { 0 },
            cap_q: if period.is_some() { 1 } else { 0 },
            s: period.unwrap_or(0),
        };

        let fitted = FittedSarima::fit(values, order)?;
        let (point, lower, upper) = fitted.forecast(values, horizon, confidence_level)?;

        ForecastResult::new(
            ForecastMethod::Sarima,
            point,
            lower,
            upper,
            confidence_level,
            MethodMetadata::Sarima {
                order: (order.p, order.d, order.q),
                seasonal_order: (order.cap_p, order.cap_d, order.cap_q, order.s),
                seasonal_period: period,
                aic: fitted.aic,
            },
        )
    }
}

/// Internal state of a conditional-least-squares SARIMA fit.
struct FittedSarima {
    order: SarimaOrder,
    intercept: f64,
    /// Prediction coefficients over lags of the differenced series
    /// (index 0 = lag 1), from the expanded AR polynomials.
    ar_lags: Vec<f64>,
    /// Prediction coefficients over lags of the residuals.
    ma_lags: Vec<f64>,
    /// Residuals of the differenced series.
    residuals: Vec<f64>,
    /// Differenced (seasonal then regular) series the model was fit on.
    working: Vec<f64>,
    /// Seasonally differenced series, kept for integration.
    seasonal_stage: Vec<f64>,
    residual_variance: f64,
    aic: Option<f64>,
}

impl FittedSarima {
    fn fit(values: &[f64], order: SarimaOrder) -> Result<Self> {
        let seasonal_stage = seasonal_difference(values, order.cap_d, order.s);
        let working = difference(&seasonal_stage, order.d);

        // The CSS recursion needs a startup window of max lag observations
        // plus residual degrees of freedom.
        let startup = (order.p + order.s * order.cap_p).max(order.q + order.s * order.cap_q);
        let n_params = order.num_params();
        if working.len() < startup + n_params + 2 {
            return Err(ForecastError::FitFailure(format!(
                "only {} observations remain after differencing, need {}",
                working.len(),
                startup + n_params + 2
            )));
        }

        let initial = initial_parameters(&working, order);
        let bounds = parameter_bounds(order);
        let config = NelderMeadConfig {
            max_iter: 1000,
            tolerance: 1e-8,
            ..Default::default()
        };

        let result = nelder_mead(
            |params| css_objective(&working, order, params),
            &initial,
            Some(&bounds),
            &config,
        );

        if !result.optimal_value.is_finite() {
            return Err(ForecastError::FitFailure(
                "conditional sum of squares did not evaluate to a finite value".into(),
            ));
        }
        tracing::debug!(
            converged = result.converged,
            iterations = result.iterations,
            css = result.optimal_value,
            "sarima css optimization finished"
        );

        let (intercept, ar, ma, sar, sma) = split_parameters(&result.optimal_point, order);
        let ar_lags = expand_ar_lags(&ar, &sar, order.s);
        let ma_lags = expand_ma_lags(&ma, &sma, order.s);

        let (residuals, residual_variance) =
            compute_residuals(&working, intercept, &ar_lags, &ma_lags);
        if !residual_variance.is_finite() {
            return Err(ForecastError::FitFailure(
                "residual variance is not finite".into(),
            ));
        }

        // Gaussian CSS likelihood, penalized by parameter count.
        let startup = ar_lags.len().max(ma_lags.len());
        let n_eff = (working.len() - startup) as f64;
        let aic = if residual_variance > 0.0 {
            let ll = -0.5
                * n_eff
                * (1.0 + residual_variance.ln() + (2.0 * std::f64::consts::PI).ln());
            Some(-2.0 * ll + 2.0 * n_params as f64)
        } else {
            None
        };

        Ok(Self {
            order,
            intercept,
            ar_lags,
            ma_lags,
            residuals,
            working,
            seasonal_stage,
            residual_variance,
            aic,
        })
    }

    /// Forecast on the original scale with ψ-weight prediction intervals.
    fn forecast(
        &self,
        values: &[f64],
        horizon: usize,
        confidence_level: f64,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
        // Recursive extrapolation on the differenced scale; future shocks
        // are their expectation, zero.
        let mut extended = self.working.clone();
        let mut shocks = self.residuals.clone();
        for _ in 0..horizon {
            let t = extended.len();
            let mut pred = self.intercept;
            for (k, &a) in self.ar_lags.iter().enumerate() {
                if a != 0.0 && t > k {
                    pred += a * (extended[t - 1 - k] - self.intercept);
                }
            }
            for (k, &b) in self.ma_lags.iter().enumerate() {
                if b != 0.0 && t > k {
                    pred += b * shocks[t - 1 - k];
                }
            }
            extended.push(pred);
            shocks.push(0.0);
        }
        let forecast_diff = &extended[self.working.len()..];

        // Undo regular differencing against the seasonal stage, then undo
        // seasonal differencing against the original series.
        let after_regular = integrate(forecast_diff, &self.seasonal_stage, self.order.d);
        let point = seasonal_integrate(&after_regular, values, self.order.cap_d, self.order.s);

        // Per-step variance from the ψ-weights of the full AR polynomial,
        // differencing operators included.
        let psi = self.psi_weights(horizon);
        let normal = Normal::standard();
        let alpha = 1.0 - confidence_level;
        let z = normal.inverse_cdf(1.0 - alpha / 2.0);

        let mut lower = Vec::with_capacity(horizon);
        let mut upper = Vec::with_capacity(horizon);
        let mut cumulative = 0.0;
        for (h, &p) in point.iter().enumerate() {
            cumulative += psi[h] * psi[h];
            let se = (self.residual_variance * cumulative).max(0.0).sqrt();
            lower.push(p - z * se);
            upper.push(p + z * se);
        }

        Ok((point, lower, upper))
    }

    /// ψ-weights of the ARIMA process, including differencing operators.
    fn psi_weights(&self, horizon: usize) -> Vec<f64> {
        // AR side: (1 - Σ a_k B^k)(1-B)^d (1-B^s)^D as plain polynomial
        // coefficients with index = power of B.
        let mut ar_poly = vec![0.0; self.ar_lags.len() + 1];
        ar_poly[0] = 1.0;
        for (k, &a) in self.ar_lags.iter().enumerate() {
            ar_poly[k + 1] = -a;
        }
        for _ in 0..self.order.d {
            ar_poly = poly_mul(&ar_poly, &[1.0, -1.0]);
        }
        if self.order.s > 0 {
            let mut seasonal = vec![0.0; self.order.s + 1];
            seasonal[0] = 1.0;
            seasonal[self.order.s] = -1.0;
            for _ in 0..self.order.cap_d {
                ar_poly = poly_mul(&ar_poly, &seasonal);
            }
        }

        let mut ma_poly = vec![0.0; self.ma_lags.len() + 1];
        ma_poly[0] = 1.0;
        for (k, &b) in self.ma_lags.iter().enumerate() {
            ma_poly[k + 1] = b;
        }

        let mut psi = vec![0.0; horizon];
        psi[0] = 1.0;
        for j in 1..horizon {
            let mut value = *ma_poly.get(j).unwrap_or(&0.0);
            for i in 1..=j.min(ar_poly.len() - 1) {
                value -= ar_poly[i] * psi[j - i];
            }
            psi[j] = value;
        }
        psi
    }
}

/// Conditional sum of squares for a parameter vector.
fn css_objective(working: &[f64], order: SarimaOrder, params: &[f64]) -> f64 {
    let (intercept, ar, ma, sar, sma) = split_parameters(params, order);
    let ar_lags = expand_ar_lags(&ar, &sar, order.s);
    let ma_lags = expand_ma_lags(&ma, &sma, order.s);

    let startup = ar_lags.len().max(ma_lags.len());
    let n = working.len();
    if n <= startup {
        return f64::MAX;
    }

    let mut residuals = vec![0.0; n];
    let mut css = 0.0;
    for t in startup..n {
        let mut pred = intercept;
        for (k, &a) in ar_lags.iter().enumerate() {
            if a != 0.0 {
                pred += a * (working[t - 1 - k] - intercept);
            }
        }
        for (k, &b) in ma_lags.iter().enumerate() {
            if b != 0.0 {
                pred += b * residuals[t - 1 - k];
            }
        }
        let error = working[t] - pred;
        residuals[t] = error;
        css += error * error;
    }

    if css.is_finite() {
        css
    } else {
        f64::MAX
    }
}

/// Residuals and residual variance at the fitted parameters.
fn compute_residuals(
    working: &[f64],
    intercept: f64,
    ar_lags: &[f64],
    ma_lags: &[f64],
) -> (Vec<f64>, f64) {
    let startup = ar_lags.len().max(ma_lags.len());
    let n = working.len();
    let mut residuals = vec![0.0; n];

    for t in startup..n {
        let mut pred = intercept;
        for (k, &a) in ar_lags.iter().enumerate() {
            if a != 0.0 {
                pred += a * (working[t - 1 - k] - intercept);
            }
        }
        for (k, &b) in ma_lags.iter().enumerate() {
            if b != 0.0 {
                pred += b * residuals[t - 1 - k];
            }
        }
        residuals[t] = working[t] - pred;
    }

    let tail = &residuals[startup..];
    let variance = if tail.is_empty() {
        0.0
    } else {
        tail.iter().map(|r| r * r).sum::<f64>() / tail.len() as f64
    };
    (residuals, variance)
}

/// Parameter layout: [intercept, ar(p), ma(q), sar(P), sma(Q)].
fn split_parameters(
    params: &[f64],
    order: SarimaOrder,
) -> (f64, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut cursor = 1;
    let intercept = params[0];
    let ar = params[cursor..cursor + order.p].to_vec();
    cursor += order.p;
    let ma = params[cursor..cursor + order.q].to_vec();
    cursor += order.q;
    let sar = params[cursor..cursor + order.cap_p].to_vec();
    cursor += order.cap_p;
    let sma = params[cursor..cursor + order.cap_q].to_vec();
    (intercept, ar, ma, sar, sma)
}

fn initial_parameters(working: &[f64], order: SarimaOrder) -> Vec<f64> {
    let mut initial = vec![0.0; order.num_params()];
    initial[0] = mean(working);
    for value in initial.iter_mut().skip(1) {
        *value = 0.1;
    }
    initial
}

fn parameter_bounds(order: SarimaOrder) -> Vec<(f64, f64)> {
    let mut bounds = vec![(f64::NEG_INFINITY, f64::INFINITY)];
    for _ in 1..order.num_params() {
        bounds.push((-0.99, 0.99));
    }
    bounds
}

/// Multiplicative AR expansion: (1 - Σφ_i B^i)(1 - ΣΦ_j B^{js}) as
/// prediction coefficients over lags (index 0 = lag 1).
fn expand_ar_lags(ar: &[f64], sar: &[f64], period: usize) -> Vec<f64> {
    let max_lag = ar.len() + sar.len() * period;
    let mut lags = vec![0.0; max_lag];
    for (i, &phi) in ar.iter().enumerate() {
        lags[i] += phi;
    }
    for (j, &sphi) in sar.iter().enumerate() {
        let base = (j + 1) * period;
        lags[base - 1] += sphi;
        for (i, &phi) in ar.iter().enumerate() {
            // Cross term of the multiplicative polynomial carries a minus.
            lags[base + i] -= phi * sphi;
        }
    }
    lags
}

/// Multiplicative MA expansion: (1 + Σθ_i B^i)(1 + ΣΘ_j B^{js}).
fn expand_ma_lags(ma: &[f64], sma: &[f64], period: usize) -> Vec<f64> {
    let max_lag = ma.len() + sma.len() * period;
    let mut lags = vec![0.0; max_lag];
    for (i, &theta) in ma.iter().enumerate() {
        lags[i] += theta;
    }
    for (j, &stheta) in sma.iter().enumerate() {
        let base = (j + 1) * period;
        lags[base - 1] += stheta;
        for (i, &theta) in ma.iter().enumerate() {
            lags[base + i] += theta * stheta;
        }
    }
    lags
}

/// Plain polynomial product, index = power of B.
fn poly_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0.0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            out[i + j] += ai * bj;
        }
    }
    out
}

/// Apply regular differencing `d` times.
fn difference(series: &[f64], d: usize) -> Vec<f64> {
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() <= 1 {
            break;
        }
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Apply seasonal differencing `d` times at `period`.
fn seasonal_difference(series: &[f64], d: usize, period: usize) -> Vec<f64> {
    if period == 0 {
        return series.to_vec();
    }
    let mut result = series.to_vec();
    for _ in 0..d {
        if result.len() <= period {
            break;
        }
        result = result
            .iter()
            .skip(period)
            .zip(result.iter())
            .map(|(curr, prev)| curr - prev)
            .collect();
    }
    result
}

/// Undo regular differencing using the pre-difference history.
fn integrate(forecast: &[f64], history: &[f64], d: usize) -> Vec<f64> {
    if d == 0 || forecast.is_empty() {
        return forecast.to_vec();
    }

    let mut result = forecast.to_vec();
    for level in (0..d).rev() {
        let intermediate = difference(history, level);
        let mut last = *intermediate.last().unwrap_or(&0.0);
        for value in result.iter_mut() {
            last += *value;
            *value = last;
        }
    }
    result
}

/// Undo seasonal differencing using the original series as history.
fn seasonal_integrate(forecast: &[f64], history: &[f64], d: usize, period: usize) -> Vec<f64> {
    if d == 0 || period == 0 || forecast.is_empty() {
        return forecast.to_vec();
    }

    let mut result = forecast.to_vec();
    for _ in 0..d {
        let n = history.len();
        let mut integrated = Vec::with_capacity(result.len());
        for (h, &value) in result.iter().enumerate() {
            let previous = if h < period {
                // Last full season of observed history
                history[n - period + h]
            } else {
                integrated[h - period]
            };
            integrated.push(value + previous);
        }
        result = integrated;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ts(values: &[f64]) -> TimeSeries {
        TimeSeries::from_slice(values).unwrap()
    }

    fn seasonal_trend_series(n: usize, period: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let seasonal =
                    8.0 * (2.0 * std::f64::consts::PI * i as f64 / period as f64).sin();
                50.0 + 0.4 * i as f64 + seasonal
            })
            .collect()
    }

    #[test]
    fn insufficient_data_is_rejected() {
        let model = SeasonalArima::new();
        let result = model.fit_and_forecast(&ts(&[1.0; 9]), 3, 0.95);
        assert!(matches!(
            result,
            Err(ForecastError::InsufficientData { needed: 10, got: 9 })
        ));
    }

    #[test]
    fn non_seasonal_fit_on_noise_like_data() {
        // No lag clears the ACF threshold, so the order stays non-seasonal
        let values: Vec<f64> = (0..40)
            .map(|i| 20.0 + ((i * 37 + 11) % 23) as f64 * 0.5)
            .collect();
        let result = SeasonalArima::new()
            .fit_and_forecast(&ts(&values), 5, 0.95)
            .unwrap();

        assert_eq!(result.horizon(), 5);
        assert_eq!(result.method(), ForecastMethod::Sarima);

        match result.metadata() {
            MethodMetadata::Sarima {
                order,
                seasonal_order,
                seasonal_period,
                aic,
            } => {
                assert_eq!(order.0, 1);
                assert_eq!(order.2, 1);
                assert_eq!(*seasonal_order, (0, 0, 0, 0));
                assert!(seasonal_period.is_none());
                assert!(aic.is_some());
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn seasonal_fit_uses_detected_period() {
        let values = seasonal_trend_series(72, 6);
        let result = SeasonalArima::new()
            .fit_and_forecast(&ts(&values), 6, 0.95)
            .unwrap();

        match result.metadata() {
            MethodMetadata::Sarima {
                seasonal_order,
                seasonal_period,
                ..
            } => {
                let period = seasonal_period.expect("period should be detected");
                assert_eq!(*seasonal_order, (1, 1, 1, period));
            }
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn explicit_period_is_honored() {
        let values = seasonal_trend_series(60, 12);
        let result = SeasonalArima::with_seasonal_period(12)
            .fit_and_forecast(&ts(&values), 6, 0.95)
            .unwrap();

        match result.metadata() {
            MethodMetadata::Sarima {
                seasonal_period, ..
            } => assert_eq!(*seasonal_period, Some(12)),
            other => panic!("unexpected metadata: {other:?}"),
        }
    }

    #[test]
    fn bounds_bracket_point_and_widen() {
        let values = seasonal_trend_series(72, 6);
        let result = SeasonalArima::new()
            .fit_and_forecast(&ts(&values), 8, 0.95)
            .unwrap();

        let (point, lower, upper) = (result.point(), result.lower_bound(), result.upper_bound());
        for i in 0..8 {
            assert!(lower[i] <= point[i] && point[i] <= upper[i]);
        }
        let first = upper[0] - lower[0];
        let last = upper[7] - lower[7];
        assert!(last >= first);
    }

    #[test]
    fn seasonal_fit_fails_when_differencing_exhausts_data() {
        // 24 points with period 12: one seasonal difference leaves too few
        // observations for the CSS startup window.
        let values = seasonal_trend_series(24, 12);
        let result = SeasonalArima::with_seasonal_period(12).fit_and_forecast(&ts(&values), 4, 0.95);
        assert!(matches!(result, Err(ForecastError::FitFailure(_))));
    }

    #[test]
    fn forecast_tracks_trend() {
        let values: Vec<f64> = (0..50).map(|i| 10.0 + 2.0 * i as f64).collect();
        let result = SeasonalArima::new()
            .fit_and_forecast(&ts(&values), 3, 0.95)
            .unwrap();

        // Forecast should continue climbing past the last observation
        assert!(result.point()[0] > 100.0);
        assert!(result.point()[2] >= result.point()[0]);
    }

    #[test]
    fn expand_ar_lags_multiplicative_cross_term() {
        let lags = expand_ar_lags(&[0.5], &[0.3], 4);
        // lag 1: phi, lag 4: Phi, lag 5: -phi*Phi
        assert_relative_eq!(lags[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(lags[3], 0.3, epsilon = 1e-12);
        assert_relative_eq!(lags[4], -0.15, epsilon = 1e-12);
    }

    #[test]
    fn expand_ma_lags_multiplicative_cross_term() {
        let lags = expand_ma_lags(&[0.4], &[0.2], 3);
        assert_relative_eq!(lags[0], 0.4, epsilon = 1e-12);
        assert_relative_eq!(lags[2], 0.2, epsilon = 1e-12);
        assert_relative_eq!(lags[3], 0.08, epsilon = 1e-12);
    }

    #[test]
    fn difference_and_integrate_round_trip() {
        let series = [1.0, 4.0, 9.0, 16.0, 25.0, 36.0];
        let diff = difference(&series, 1);
        assert_eq!(diff, vec![3.0, 5.0, 7.0, 9.0, 11.0]);

        // Integrating a continuation of the differences continues the series
        let continued = integrate(&[13.0, 15.0], &series, 1);
        assert_eq!(continued, vec![49.0, 64.0]);
    }

    #[test]
    fn seasonal_difference_and_integrate_round_trip() {
        let series = [1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0];
        let diff = seasonal_difference(&series, 1, 3);
        assert_eq!(diff, vec![4.0, 4.0, 4.0, 4.0, 4.0, 4.0]);

        let continued = seasonal_integrate(&[4.0, 4.0, 4.0, 4.0], &series, 1, 3);
        assert_eq!(continued, vec![13.0, 14.0, 15.0, 17.0]);
    }

    #[test]
    fn poly_mul_matches_hand_expansion() {
        // (1 - B)(1 - B^2) = 1 - B - B^2 + B^3
        let product = poly_mul(&[1.0, -1.0], &[1.0, 0.0, -1.0]);
        assert_eq!(product, vec![1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn psi_weights_for_pure_ar1() {
        let fitted = FittedSarima {
            order: SarimaOrder {
                p: 1,
                d: 0,
                q: 0,
                cap_p: 0,
                cap_d: 0,
                cap_q: 0,
                s: 0,
            },
            intercept: 0.0,
            ar_lags: vec![0.5],
            ma_lags: vec![],
            residuals: vec![],
            working: vec![],
            seasonal_stage: vec![],
            residual_variance: 1.0,
            aic: None,
        };

        let psi = fitted.psi_weights(4);
        assert_relative_eq!(psi[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(psi[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(psi[2], 0.25, epsilon = 1e-12);
        assert_relative_eq!(psi[3], 0.125, epsilon = 1e-12);
    }
}
