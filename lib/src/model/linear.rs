//! Ordinary-least-squares linear regression with compile-time fit state.
//!
//! - [`LinearRegression`] = `LinearModel<Unfitted>`: can only be fitted.
//! - [`LinearModel<Fitted>`]: inference-only, serializable predictor.
//!
//! Fitting consumes the unfitted model, so a model is fitted exactly once and cannot be
//! used for prediction before that. The fitted model keeps only `weights` and `bias`;
//! solver settings stay with the [`LeastSquares`] that produced them.

pub use crate::model::{Fitted, InferenceModel, Unfitted};
use crate::error::{LifesatError, Result};
use crate::metrics::RegressionMetrics;
use crate::solver::LeastSquares;
use ndarray::{Array1, Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::debug;

/// Learned parameters of a linear model: one weight per feature and a bias (intercept).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearParams {
    pub weights: Array1<f64>,
    pub bias: f64,
}

/// Serializable representation of [`LinearParams`].
///
/// Kept in `f64` so that a saved and reloaded model predicts bit-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl From<&LinearParams> for SerializableLinearParams {
    fn from(params: &LinearParams) -> Self {
        Self {
            weights: params.weights.to_vec(),
            bias: params.bias,
        }
    }
}

impl TryFrom<SerializableLinearParams> for LinearParams {
    type Error = LifesatError;

    fn try_from(value: SerializableLinearParams) -> Result<Self> {
        if value.weights.is_empty() {
            return Err(LifesatError::EmptyData("model has no weights".into()));
        }
        if !value.bias.is_finite() || !value.weights.iter().all(|w| w.is_finite()) {
            return Err(LifesatError::NonFinite("model parameters".into()));
        }
        Ok(Self {
            weights: Array1::from(value.weights),
            bias: value.bias,
        })
    }
}

/// A linear model with its fit state encoded at the type level.
#[derive(Debug, Clone)]
pub struct LinearModel<S> {
    params: LinearParams,
    _state: PhantomData<S>,
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression = LinearModel<Unfitted>;

impl LinearRegression {
    /// Creates an unfitted model. The number of features is taken from the data at fit time.
    pub fn new() -> Self {
        Self {
            params: LinearParams {
                weights: Array1::zeros(0),
                bias: 0.0,
            },
            _state: PhantomData,
        }
    }

    /// Fits with the default solver (intercept enabled, no regularization).
    ///
    /// # Example
    ///
    /// ```rust
    /// use lifesat::model::linear::LinearRegression;
    /// use ndarray::array;
    ///
    /// let x = array![[0.0], [1.0], [2.0]];
    /// let y = array![1.0, 3.0, 5.0];
    /// let model = LinearRegression::new().fit(&x, &y).unwrap();
    /// assert!((model.intercept() - 1.0).abs() < 1e-12);
    /// ```
    pub fn fit(self, x: &Array2<f64>, y: &Array1<f64>) -> Result<LinearModel<Fitted>> {
        self.fit_with(&LeastSquares::default(), x, y)
    }

    /// Fits with explicit solver settings.
    pub fn fit_with(
        self,
        solver: &LeastSquares,
        x: &Array2<f64>,
        y: &Array1<f64>,
    ) -> Result<LinearModel<Fitted>> {
        let params = solver.solve(x.view(), y.view())?;
        Ok(LinearModel::<Fitted>::new(params))
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearModel<Fitted> {
    /// Wraps already-learned parameters, e.g. from an external source.
    pub fn new(params: LinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> &LinearParams {
        &self.params
    }

    pub fn intercept(&self) -> f64 {
        self.params.bias
    }

    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.params.weights.view()
    }

    pub fn n_features(&self) -> usize {
        self.params.weights.len()
    }

    /// Predicts a single sample.
    pub fn predict_one(&self, sample: ArrayView1<'_, f64>) -> Result<f64> {
        self.check_features(sample.len())?;
        if !sample.iter().all(|v| v.is_finite()) {
            return Err(LifesatError::NonFinite("prediction input".into()));
        }
        Ok(sample.dot(&self.params.weights) + self.params.bias)
    }

    /// Coefficient of determination of the predictions on `x` against `y`.
    pub fn score(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<f64> {
        Ok(self.evaluate(x, y)?.r2)
    }

    /// All regression metrics of the predictions on `x` against `y`.
    pub fn evaluate(&self, x: &Array2<f64>, y: &Array1<f64>) -> Result<RegressionMetrics> {
        let y_pred = self.predict(x)?;
        RegressionMetrics::compute(y.view(), y_pred.view())
    }

    fn check_features(&self, got: usize) -> Result<()> {
        if got != self.n_features() {
            return Err(LifesatError::FeatureMismatch {
                expected_features: self.n_features(),
                got_features: got,
            });
        }
        Ok(())
    }
}

/// Batch inference `y = x·w + b`, one output per row of `x`.
impl InferenceModel for LinearModel<Fitted> {
    type Input = Array2<f64>;
    type Output = Array1<f64>;
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: &Self::Input) -> Result<Self::Output> {
        self.check_features(input.ncols())?;
        if !input.iter().all(|v| v.is_finite()) {
            return Err(LifesatError::NonFinite("prediction input".into()));
        }
        let preds = input.dot(&self.params.weights) + self.params.bias;
        debug!(rows = input.nrows(), "predicted batch");
        Ok(preds)
    }

    fn extract_params(&self) -> Self::ParamsRepr {
        (&self.params).into()
    }

    fn from_params(params: Self::ParamsRepr) -> Result<Self> {
        Ok(Self::new(LinearParams::try_from(params)?))
    }
}
