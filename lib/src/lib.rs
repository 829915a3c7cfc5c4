//! # lifesat
//!
//! Fits an ordinary-least-squares line to GDP per capita against life satisfaction and
//! predicts the score of one new country.
//!
//! ## Workflow
//!
//! 1. [`Table::load`](dataset::Table::load) reads a CSV file or URL.
//! 2. [`Table::select_columns`](dataset::Table::select_columns) extracts `x` of shape
//!    `(n_samples, 1)` and `y` of shape `(n_samples,)`.
//! 3. [`ScatterPlot`](plot::ScatterPlot) draws the two columns inside a fixed axis window.
//! 4. [`LinearRegression::fit`](model::linear::LinearRegression) solves least squares in
//!    closed form and returns a fitted model.
//! 5. [`InferenceModel::predict`](model::InferenceModel::predict) evaluates the line.
//!
//! [`pipeline::run`] strings these together.
//!
//! ## Quick Start
//!
//! ```rust
//! use lifesat::dataset::Table;
//! use lifesat::model::linear::LinearRegression;
//! use lifesat::model::InferenceModel;
//! use ndarray::array;
//!
//! let csv = "GDP per capita (USD),Life satisfaction\n\
//!            24000,5.0\n26000,5.6\n28000,5.8\n30000,6.4\n32000,6.6\n";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//! let (x, y) = table
//!     .select_columns("GDP per capita (USD)", "Life satisfaction")
//!     .unwrap();
//!
//! let model = LinearRegression::new().fit(&x, &y).unwrap();
//! let prediction = model.predict(&array![[37_655.2]]).unwrap();
//! assert!((prediction[0] - 7.81104).abs() < 1e-9);
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: CSV tables, data sources and column selection
//! - `model`: fit-state markers, the inference trait and the linear model
//! - `solver`: closed-form least squares
//! - `metrics`: MSE, RMSE, MAE, R²
//! - `plot`: SVG scatter chart
//! - `pipeline`: configuration and the end-to-end run

/// Crate-wide error type.
pub mod error;

/// Tabular data loading and column selection.
pub mod dataset;

/// Regression quality metrics.
pub mod metrics;

/// Models with compile-time fit state.
pub mod model;

/// Scatter chart rendering.
pub mod plot;

/// End-to-end run and its configuration.
pub mod pipeline;

/// Closed-form least-squares solver.
pub mod solver;

pub use error::{LifesatError, Result};
pub use model::linear::{LinearModel, LinearRegression};
pub use model::{Fitted, InferenceModel, Unfitted};
