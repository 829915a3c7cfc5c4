//! Regression metrics for judging a fit.

use crate::error::{LifesatError, Result};
use ndarray::ArrayView1;
use serde::Serialize;

/// Metric functions over equally sized target and prediction vectors.
pub struct Metrics;

impl Metrics {
    /// Mean squared error: `mean((y_true - y_pred)^2)`.
    pub fn mse(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        check_lengths(y_true, y_pred)?;
        let diff = &y_true - &y_pred;
        Ok(diff.mapv(|d| d * d).sum() / y_true.len() as f64)
    }

    /// Root mean squared error, in the units of the target.
    pub fn rmse(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        Ok(Self::mse(y_true, y_pred)?.sqrt())
    }

    /// Mean absolute error: `mean(|y_true - y_pred|)`.
    pub fn mae(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        check_lengths(y_true, y_pred)?;
        let diff = &y_true - &y_pred;
        Ok(diff.mapv(f64::abs).sum() / y_true.len() as f64)
    }

    /// Coefficient of determination: `1 - SS_res / SS_tot`.
    ///
    /// Can be negative for a model worse than predicting the mean. For a constant target
    /// it is `1.0` when the predictions are exact and `0.0` otherwise.
    pub fn r_squared(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<f64> {
        check_lengths(y_true, y_pred)?;
        let mean_true = y_true.sum() / y_true.len() as f64;

        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean_true).powi(2)).sum();

        if ss_tot == 0.0 {
            return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
        }
        Ok(1.0 - ss_res / ss_tot)
    }
}

fn check_lengths(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(LifesatError::ShapeMismatch {
            x_rows: y_pred.len(),
            y_len: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(LifesatError::EmptyData("no values to score".into()));
    }
    Ok(())
}

/// All regression metrics at once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

impl RegressionMetrics {
    pub fn compute(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> Result<Self> {
        let mse = Metrics::mse(y_true, y_pred)?;
        Ok(Self {
            mse,
            rmse: mse.sqrt(),
            mae: Metrics::mae(y_true, y_pred)?,
            r2: Metrics::r_squared(y_true, y_pred)?,
        })
    }
}
