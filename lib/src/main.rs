//! `lifesat` - fit GDP per capita against life satisfaction and predict one country.
//!
//! With no arguments this downloads the dataset, writes `lifesat.svg`, fits the model
//! and prints the prediction for Cyprus. Logs go to stderr; stdout carries only the
//! prediction.

use anyhow::{Context, Result};
use clap::Parser;
use lifesat::dataset::DataSource;
use lifesat::pipeline::{self, PipelineConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Fit an ordinary-least-squares line and print a prediction.
#[derive(Parser, Debug)]
#[command(name = "lifesat", version, about)]
struct Cli {
    /// CSV file path or http(s) URL
    #[arg(long, value_name = "PATH|URL")]
    source: Option<String>,

    /// Feature column
    #[arg(long)]
    x_column: Option<String>,

    /// Target column
    #[arg(long)]
    y_column: Option<String>,

    /// Feature values to predict
    #[arg(long, value_name = "X", num_args = 1..)]
    predict: Option<Vec<f64>>,

    /// Where to write the SVG chart
    #[arg(long, value_name = "PATH", conflicts_with = "no_chart")]
    chart: Option<PathBuf>,

    /// Skip rendering the chart
    #[arg(long)]
    no_chart: bool,

    /// JSON configuration file; flags override its values
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Save the fitted parameters to this file
    #[arg(long, value_name = "PATH")]
    save_model: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => PipelineConfig::default(),
        };

        if let Some(source) = self.source {
            config.source = DataSource::from(source);
        }
        if let Some(x_column) = self.x_column {
            config.x_column = x_column;
        }
        if let Some(y_column) = self.y_column {
            config.y_column = y_column;
        }
        if let Some(predict) = self.predict {
            config.predict = predict;
        }
        if self.chart.is_some() {
            config.chart = self.chart;
        }
        if self.no_chart {
            config.chart = None;
        }
        if self.save_model.is_some() {
            config.save_model = self.save_model;
        }

        config.validate()?;
        Ok(config)
    }
}

const DEFAULT_LOG_FILTER: &str = "lifesat=info";

/// `RUST_LOG` directives when set and valid, `lifesat=info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let config = Cli::parse().into_config()?;

    let report = pipeline::run(&config)
        .with_context(|| format!("pipeline failed for {}", config.source))?;
    info!(
        samples = report.n_samples,
        r2 = report.metrics.r2,
        "prediction ready"
    );

    let stdout = std::io::stdout();
    pipeline::emit(&mut stdout.lock(), report.predictions.view())?;
    Ok(())
}
