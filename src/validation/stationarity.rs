//! Stationarity testing for order selection.

use crate::utils::ols::fit_least_squares;

/// Critical values at common significance levels.
#[derive(Debug, Clone, Default)]
pub struct CriticalValues {
    /// Critical value at 1% significance.
    pub cv_1pct: f64,
    /// Critical value at 5% significance.
    pub cv_5pct: f64,
    /// Critical value at 10% significance.
    pub cv_10pct: f64,
}

/// Result of a stationarity test.
#[derive(Debug, Clone)]
pub struct StationarityResult {
    /// Test statistic (t-ratio on the lagged level).
    pub statistic: f64,
    /// Approximate p-value.
    pub p_value: f64,
    /// Number of lagged differences included.
    pub lags: usize,
    /// Whether the series appears stationary at 5% significance.
    pub is_stationary: bool,
    /// MacKinnon critical values (constant, no trend).
    pub critical_values: CriticalValues,
}

impl StationarityResult {
    fn degenerate(lags: usize) -> Self {
        Self {
            statistic: f64::NAN,
            p_value: f64::NAN,
            lags,
            is_stationary: false,
            critical_values: CriticalValues::default(),
        }
    }
}

/// Augmented Dickey-Fuller test for a unit root.
///
/// Regresses `Δy_t` on a constant, `y_{t-1}`, and `k` lagged differences,
/// choosing `k` by AIC up to `max_lags` (default `(n-1)^(1/3)`). The null
/// hypothesis is a unit root; rejection (statistic below the 5% critical
/// value) implies stationarity.
///
/// Series shorter than 4 observations yield a NaN-statistic, non-stationary
/// result rather than an error.
pub fn adf_test(series: &[f64], max_lags: Option<usize>) -> StationarityResult {
    let n = series.len();
    if n < 4 {
        return StationarityResult::degenerate(0);
    }

    let max_lags = max_lags
        .unwrap_or_else(|| ((n - 1) as f64).powf(1.0 / 3.0).floor() as usize)
        .min(n / 2 - 1);

    let diff: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();

    // Choose the lag order by AIC over the augmented regressions.
    let mut best: Option<(usize, f64)> = None;
    for k in 0..=max_lags {
        if let Some((_, _, aic)) = adf_regression(series, &diff, k) {
            if best.map(|(_, b)| aic < b).unwrap_or(true) {
                best = Some((k, aic));
            }
        }
    }
    let Some((lags, _)) = best else {
        return StationarityResult::degenerate(0);
    };

    let Some((rho, se, _)) = adf_regression(series, &diff, lags) else {
        return StationarityResult::degenerate(lags);
    };
    if se <= 0.0 || !se.is_finite() {
        return StationarityResult::degenerate(lags);
    }

    let t_stat = rho / se;

    // MacKinnon critical values for a regression with constant, no trend.
    let critical_values = CriticalValues {
        cv_1pct: -3.43,
        cv_5pct: -2.86,
        cv_10pct: -2.57,
    };

    let p_value = adf_p_value(t_stat);
    let is_stationary = t_stat < critical_values.cv_5pct;

    StationarityResult {
        statistic: t_stat,
        p_value,
        lags,
        is_stationary,
        critical_values,
    }
}

/// Fit `Δy_t = α + ρ·y_{t-1} + Σ γ_i·Δy_{t-i}` with `k` lagged differences.
///
/// Returns `(ρ, se(ρ), aic)`, or `None` when there are too few usable rows.
fn adf_regression(series: &[f64], diff: &[f64], k: usize) -> Option<(f64, f64, f64)> {
    let dlen = diff.len();
    let params = k + 2;
    if dlen <= k || dlen - k < params + 2 {
        return None;
    }

    let mut rows = Vec::with_capacity(dlen - k);
    let mut y = Vec::with_capacity(dlen - k);
    for t in k..dlen {
        let mut row = Vec::with_capacity(params);
        row.push(1.0);
        // diff[t] = y_{t+1} - y_t, so the lagged level is series[t]
        row.push(series[t]);
        for i in 1..=k {
            row.push(diff[t - i]);
        }
        rows.push(row);
        y.push(diff[t]);
    }

    let fit = fit_least_squares(&rows, &y).ok()?;
    let m = y.len() as f64;
    if fit.rss <= 0.0 {
        return None;
    }

    let aic = m * (fit.rss / m).ln() + 2.0 * params as f64;
    let se = fit.coefficient_se(1)?;
    Some((fit.coefficients[1], se, aic))
}

/// Approximate p-value from the MacKinnon tables (constant, no trend).
fn adf_p_value(t_stat: f64) -> f64 {
    if t_stat.is_nan() {
        return f64::NAN;
    }

    if t_stat < -4.0 {
        0.001
    } else if t_stat < -3.43 {
        0.01
    } else if t_stat < -2.86 {
        0.05
    } else if t_stat < -2.57 {
        0.10
    } else if t_stat < -1.94 {
        0.20
    } else if t_stat < -1.62 {
        0.30
    } else if t_stat < -1.28 {
        0.40
    } else if t_stat < -0.84 {
        0.50
    } else if t_stat < 0.0 {
        0.70
    } else {
        0.90 + 0.05 * (1.0 - (-t_stat).exp())
    }
}
