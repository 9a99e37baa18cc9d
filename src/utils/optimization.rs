//! Nelder-Mead simplex minimization for smoothing and SARIMA parameter fits.

/// Configuration for the simplex search.
#[derive(Debug, Clone)]
pub struct NelderMeadConfig {
    /// Maximum number of iterations.
    pub max_iter: usize,
    /// Convergence tolerance on the objective spread.
    pub tolerance: f64,
    /// Initial simplex step size.
    pub initial_step: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-8,
            initial_step: 0.05,
        }
    }
}

/// Result of a simplex minimization.
#[derive(Debug, Clone)]
pub struct NelderMeadResult {
    /// The best point found.
    pub optimal_point: Vec<f64>,
    /// Objective value at the best point.
    pub optimal_value: f64,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the spread converged below tolerance.
    pub converged: bool,
}

// Standard Nelder-Mead coefficients.
const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Minimize `objective` starting from `initial`, clamping every candidate
/// point into `bounds` when given.
pub fn nelder_mead<F>(
    objective: F,
    initial: &[f64],
    bounds: Option<&[(f64, f64)]>,
    config: &NelderMeadConfig,
) -> NelderMeadResult
where
    F: Fn(&[f64]) -> f64,
{
    let dim = initial.len();
    if dim == 0 {
        return NelderMeadResult {
            optimal_point: vec![],
            optimal_value: f64::NAN,
            iterations: 0,
            converged: false,
        };
    }

    let clamp = |point: &[f64]| -> Vec<f64> {
        match bounds {
            Some(b) => point
                .iter()
                .zip(b.iter())
                .map(|(&x, &(lo, hi))| x.clamp(lo, hi))
                .collect(),
            None => point.to_vec(),
        }
    };

    // Initial simplex: start point plus one perturbed vertex per dimension.
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(clamp(initial));
    for i in 0..dim {
        let mut vertex = initial.to_vec();
        let step = if initial[i].abs() > 1e-10 {
            config.initial_step * initial[i].abs()
        } else {
            config.initial_step
        };
        vertex[i] += step;
        simplex.push(clamp(&vertex));
    }
    let mut values: Vec<f64> = simplex.iter().map(|v| objective(v)).collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        iterations += 1;

        let mut order: Vec<usize> = (0..=dim).collect();
        order.sort_by(|&a, &b| {
            values[a]
                .partial_cmp(&values[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let best = order[0];
        let second_worst = order[dim - 1];
        let worst = order[dim];

        if (values[worst] - values[best]).abs() < config.tolerance {
            converged = true;
            break;
        }

        // Centroid of all vertices except the worst.
        let mut centroid = vec![0.0; dim];
        for (idx, vertex) in simplex.iter().enumerate() {
            if idx == worst {
                continue;
            }
            for (c, &x) in centroid.iter_mut().zip(vertex.iter()) {
                *c += x;
            }
        }
        for c in centroid.iter_mut() {
            *c /= dim as f64;
        }

        let along = |from: &[f64], coeff: f64| -> Vec<f64> {
            let moved: Vec<f64> = centroid
                .iter()
                .zip(from.iter())
                .map(|(&c, &w)| c + coeff * (c - w))
                .collect();
            clamp(&moved)
        };

        let reflected = along(&simplex[worst], REFLECTION);
        let reflected_value = objective(&reflected);

        if reflected_value < values[best] {
            // Try to expand further in the same direction.
            let expanded = along(&simplex[worst], EXPANSION);
            let expanded_value = objective(&expanded);
            if expanded_value < reflected_value {
                simplex[worst] = expanded;
                values[worst] = expanded_value;
            } else {
                simplex[worst] = reflected;
                values[worst] = reflected_value;
            }
            continue;
        }

        if reflected_value < values[second_worst] {
            simplex[worst] = reflected;
            values[worst] = reflected_value;
            continue;
        }

        // Contract toward the centroid.
        let contracted = along(&simplex[worst], -CONTRACTION);
        let contracted_value = objective(&contracted);
        if contracted_value < values[worst] {
            simplex[worst] = contracted;
            values[worst] = contracted_value;
            continue;
        }

        // Shrink everything toward the best vertex.
        let best_vertex = simplex[best].clone();
        for idx in 0..=dim {
            if idx == best {
                continue;
            }
            let shrunk: Vec<f64> = simplex[idx]
                .iter()
                .zip(best_vertex.iter())
                .map(|(&x, &b)| b + SHRINK * (x - b))
                .collect();
            simplex[idx] = clamp(&shrunk);
            values[idx] = objective(&simplex[idx]);
        }
    }

    let best_idx = values
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);

    NelderMeadResult {
        optimal_point: simplex[best_idx].clone(),
        optimal_value: values[best_idx],
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minimizes_quadratic_bowl() {
        let result = nelder_mead(
            |x| (x[0] - 2.0).powi(2) + (x[1] - 3.0).powi(2),
            &[0.0, 0.0],
            None,
            &NelderMeadConfig::default(),
        );

        assert!(result.converged);
        assert_relative_eq!(result.optimal_point[0], 2.0, epsilon = 0.01);
        assert_relative_eq!(result.optimal_point[1], 3.0, epsilon = 0.01);
    }

    #[test]
    fn respects_bounds() {
        // Unconstrained minimum at x = 5, bounded to [0, 1]
        let result = nelder_mead(
            |x| (x[0] - 5.0).powi(2),
            &[0.5],
            Some(&[(0.0, 1.0)]),
            &NelderMeadConfig::default(),
        );

        assert!(result.optimal_point[0] <= 1.0);
        assert_relative_eq!(result.optimal_point[0], 1.0, epsilon = 0.01);
    }

    #[test]
    fn handles_one_dimension() {
        let result = nelder_mead(
            |x| (x[0] + 1.5).powi(2),
            &[10.0],
            None,
            &NelderMeadConfig::default(),
        );

        assert_relative_eq!(result.optimal_point[0], -1.5, epsilon = 0.01);
    }

    #[test]
    fn empty_input_is_inert() {
        let result = nelder_mead(|_| 0.0, &[], None, &NelderMeadConfig::default());
        assert!(result.optimal_point.is_empty());
        assert!(!result.converged);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let config = NelderMeadConfig {
            max_iter: 5,
            ..Default::default()
        };
        let result = nelder_mead(
            |x| (x[0] - 100.0).powi(2),
            &[0.0],
            None,
            &config,
        );
        assert!(result.iterations <= 5);
    }

    #[test]
    fn rosenbrock_gets_close() {
        let result = nelder_mead(
            |x| {
                let a = 1.0 - x[0];
                let b = x[1] - x[0] * x[0];
                a * a + 100.0 * b * b
            },
            &[-1.0, 1.0],
            None,
            &NelderMeadConfig {
                max_iter: 5000,
                ..Default::default()
            },
        );

        assert!(result.optimal_value < 1e-3);
    }
}
