//! The end-to-end run: load, select, plot, fit, predict, emit.
//!
//! [`PipelineConfig::default`] reproduces the life-satisfaction example: GDP per capita
//! against life satisfaction, axis window `[23500, 32500, 4, 9]`, and one prediction for
//! Cyprus (GDP per capita 37 655.2 USD in 2020).

use crate::dataset::{DataSource, Table};
use crate::error::{LifesatError, Result};
use crate::metrics::RegressionMetrics;
use crate::model::linear::LinearRegression;
use crate::model::InferenceModel;
use crate::plot::{AxisBounds, ScatterPlot};
use ndarray::{Array1, ArrayView1, Axis};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_SOURCE: &str = "https://github.com/ageron/data/raw/main/lifesat/lifesat.csv";
pub const GDP_COLUMN: &str = "GDP per capita (USD)";
pub const LIFE_SATISFACTION_COLUMN: &str = "Life satisfaction";
/// Cyprus' GDP per capita in 2020.
pub const CYPRUS_GDP_PER_CAPITA: f64 = 37_655.2;
pub const DEFAULT_CHART: &str = "lifesat.svg";

/// Everything a run needs. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub source: DataSource,
    pub x_column: String,
    pub y_column: String,
    pub axis_bounds: AxisBounds,
    /// Feature values to predict, one single-feature row each.
    pub predict: Vec<f64>,
    /// Where to write the chart; `None` skips plotting.
    pub chart: Option<PathBuf>,
    /// Where to persist the fitted parameters; `None` skips saving.
    pub save_model: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: DataSource::from(DEFAULT_SOURCE.to_string()),
            x_column: GDP_COLUMN.to_string(),
            y_column: LIFE_SATISFACTION_COLUMN.to_string(),
            axis_bounds: AxisBounds {
                x_min: 23_500.0,
                x_max: 32_500.0,
                y_min: 4.0,
                y_max: 9.0,
            },
            predict: vec![CYPRUS_GDP_PER_CAPITA],
            chart: Some(PathBuf::from(DEFAULT_CHART)),
            save_model: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.x_column.is_empty() || self.y_column.is_empty() {
            return Err(LifesatError::Config("column names must not be empty".into()));
        }
        if self.predict.is_empty() {
            return Err(LifesatError::Config("nothing to predict".into()));
        }
        if !self.predict.iter().all(|v| v.is_finite()) {
            return Err(LifesatError::Config("prediction inputs must be finite".into()));
        }
        Ok(())
    }
}

/// Outcome of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub n_samples: usize,
    pub intercept: f64,
    pub slope: f64,
    /// Fit quality on the training data.
    pub metrics: RegressionMetrics,
    pub predictions: Array1<f64>,
    /// Points drawn inside the axis window, when a chart was rendered.
    pub plotted_points: Option<usize>,
}

/// Loads the configured source and runs the remaining steps on it.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    config.validate()?;

    info!(source = %config.source, "loading dataset");
    let table = Table::load(&config.source)?;
    info!(
        rows = table.n_rows(),
        columns = table.n_columns(),
        "dataset loaded"
    );

    run_on_table(config, &table)
}

/// Runs select, plot, fit and predict on an already loaded table.
pub fn run_on_table(config: &PipelineConfig, table: &Table) -> Result<PipelineReport> {
    config.validate()?;

    let (x, y) = table.select_columns(&config.x_column, &config.y_column)?;

    let plotted_points = match &config.chart {
        Some(path) => {
            let points = table.points(&config.x_column, &config.y_column)?;
            let plot = ScatterPlot::new(&config.x_column, &config.y_column, config.axis_bounds);
            let drawn = plot.render_svg(path, &points)?;
            info!(path = %path.display(), points = drawn, "chart written");
            Some(drawn)
        }
        None => None,
    };

    let model = LinearRegression::new().fit(&x, &y)?;
    let metrics = model.evaluate(&x, &y)?;
    let slope = model.coefficients()[0];
    info!(
        samples = x.nrows(),
        intercept = model.intercept(),
        slope,
        r2 = metrics.r2,
        rmse = metrics.rmse,
        "model fitted"
    );

    if let Some(path) = &config.save_model {
        model.save_to_file(path)?;
        info!(path = %path.display(), "model saved");
    }

    let x_new = Array1::from(config.predict.clone()).insert_axis(Axis(1));
    let predictions = model.predict(&x_new)?;

    Ok(PipelineReport {
        n_samples: x.nrows(),
        intercept: model.intercept(),
        slope,
        metrics,
        predictions,
        plotted_points,
    })
}

/// Writes predictions as one bracketed line, e.g. `[6.30165767]`.
pub fn emit<W: Write>(out: &mut W, predictions: ArrayView1<f64>) -> Result<()> {
    writeln!(out, "{}", format_prediction(predictions))?;
    Ok(())
}

/// Formats values the way a numeric array prints: up to eight decimals, trailing zeros
/// dropped, space separated inside brackets. Magnitudes below `1e-4` switch to scientific
/// notation (`1.e-05`). Each value is formatted on its own, so a multi-value line is not
/// padded to a common width.
pub fn format_prediction(values: ArrayView1<f64>) -> String {
    let items: Vec<String> = values.iter().map(|&v| format_value(v)).collect();
    format!("[{}]", items.join(" "))
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if v != 0.0 && v.abs() < 1e-4 {
        return format_scientific(v);
    }
    let fixed = format!("{:.8}", v);
    fixed.trim_end_matches('0').to_string()
}

fn format_scientific(v: f64) -> String {
    let formatted = format!("{:.8e}", v);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}e{}{:02}",
        mantissa.trim_end_matches('0'),
        sign,
        exponent.abs()
    )
}
