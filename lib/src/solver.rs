//! Closed-form ordinary least squares.
//!
//! With the intercept enabled the solver centers `x` and `y`, solves the normal equations
//! `(XcᵀXc) w = Xcᵀyc` and recovers the intercept as `ȳ − x̄·w`. The fitted line therefore
//! always passes through `(x̄, ȳ)`. Each centered column is scaled to unit energy before
//! elimination, so a large offset or a wide spread of feature scales does not read as
//! rank deficiency.

use crate::error::{LifesatError, Result};
use crate::model::linear::LinearParams;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Pivots of the unit-diagonal scaled system below this count as zero.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Rounding allowance, in units of machine epsilon, when centering a column.
const CENTERING_EPSILONS: f64 = 8.0;

/// Least-squares solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeastSquares {
    pub fit_intercept: bool,
}

impl Default for LeastSquares {
    fn default() -> Self {
        Self {
            fit_intercept: true,
        }
    }
}

impl LeastSquares {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Minimizes `‖y − (x·w + b)‖²`.
    ///
    /// # Errors
    ///
    /// - [`LifesatError::ShapeMismatch`] if `x` rows and `y` length differ
    /// - [`LifesatError::EmptyData`] if there are no samples or no features
    /// - [`LifesatError::NonFinite`] if any input is NaN or infinite
    /// - [`LifesatError::SingularMatrix`] if a feature is constant or the features are
    ///   linearly dependent
    pub fn solve(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<LinearParams> {
        let (n_samples, n_features) = x.dim();
        if n_samples != y.len() {
            return Err(LifesatError::ShapeMismatch {
                x_rows: n_samples,
                y_len: y.len(),
            });
        }
        if n_samples == 0 {
            return Err(LifesatError::EmptyData("no samples to fit".into()));
        }
        if n_features == 0 {
            return Err(LifesatError::EmptyData("no features to fit".into()));
        }
        if !x.iter().all(|v| v.is_finite()) {
            return Err(LifesatError::NonFinite("feature matrix".into()));
        }
        if !y.iter().all(|v| v.is_finite()) {
            return Err(LifesatError::NonFinite("target vector".into()));
        }

        let (x_offset, y_offset) = if self.fit_intercept {
            let x_mean = x
                .mean_axis(Axis(0))
                .ok_or_else(|| LifesatError::EmptyData("no samples to fit".into()))?;
            let y_mean = y
                .mean()
                .ok_or_else(|| LifesatError::EmptyData("no samples to fit".into()))?;
            (x_mean, y_mean)
        } else {
            (Array1::zeros(n_features), 0.0)
        };

        let xc = &x - &x_offset;
        let yc = &y - y_offset;

        let gram = xc.t().dot(&xc);
        let rhs = xc.t().dot(&yc);

        // A column whose centered spread is within rounding noise of its magnitude is
        // constant; everything else is scaled to unit energy before elimination.
        let mut scale = Array1::<f64>::zeros(n_features);
        for (j, col) in x.axis_iter(Axis(1)).enumerate() {
            let energy = gram[[j, j]];
            let max_abs = col.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
            let noise = CENTERING_EPSILONS * f64::EPSILON * max_abs;
            if energy <= n_samples as f64 * noise * noise {
                return Err(LifesatError::SingularMatrix);
            }
            scale[j] = energy.sqrt();
        }

        let outer = scale
            .view()
            .insert_axis(Axis(1))
            .dot(&scale.view().insert_axis(Axis(0)));
        let scaled = solve_linear_system(gram / &outer, rhs / &scale, PIVOT_TOLERANCE)?;
        let weights = scaled / &scale;

        let bias = if self.fit_intercept {
            y_offset - x_offset.dot(&weights)
        } else {
            0.0
        };

        debug!(
            n_samples,
            n_features,
            bias,
            weights = ?weights.to_vec(),
            "solved normal equations"
        );
        Ok(LinearParams { weights, bias })
    }
}

/// Gaussian elimination with partial pivoting on a square system.
fn solve_linear_system(mut a: Array2<f64>, mut b: Array1<f64>, tol: f64) -> Result<Array1<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot_row = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .unwrap_or(col);
        if a[[pivot_row, col]].abs() <= tol {
            return Err(LifesatError::SingularMatrix);
        }
        if pivot_row != col {
            for k in 0..n {
                a.swap([col, k], [pivot_row, k]);
            }
            b.swap(col, pivot_row);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = Array1::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * solution[k]).sum();
        solution[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(solution)
}
