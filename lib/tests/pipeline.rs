//! End-to-end run over a pinned CSV fixture.

use lifesat::dataset::{DataSource, Table};
use lifesat::model::linear::{LinearModel, LinearRegression};
use lifesat::model::{Fitted, InferenceModel};
use lifesat::pipeline::{self, PipelineConfig, GDP_COLUMN, LIFE_SATISFACTION_COLUMN};
use lifesat::LifesatError;
use ndarray::array;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/lifesat_sample.csv")
}

fn fixture_config(dir: &std::path::Path) -> PipelineConfig {
    PipelineConfig {
        source: DataSource::Path(fixture()),
        chart: Some(dir.join("lifesat.svg")),
        save_model: Some(dir.join("model.bin")),
        ..PipelineConfig::default()
    }
}

#[test]
fn test_pinned_prediction_for_cyprus() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let report = pipeline::run(&fixture_config(tmp.path()))?;

    assert_eq!(report.n_samples, 7);
    assert!((report.predictions[0] - 7.139724571428571).abs() < 1e-9);
    assert_eq!(
        pipeline::format_prediction(report.predictions.view()),
        "[7.13972457]"
    );
    // Two fixture rows lie right of the 32 500 USD axis limit.
    assert_eq!(report.plotted_points, Some(5));
    assert!(report.metrics.r2 > 0.9 && report.metrics.r2 < 1.0);
    Ok(())
}

#[test]
fn test_line_passes_through_training_means() -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::from_path(fixture())?;
    let (x, y) = table.select_columns(GDP_COLUMN, LIFE_SATISFACTION_COLUMN)?;
    let model = LinearRegression::new().fit(&x, &y)?;

    let x_mean = x.mean().ok_or("empty x")?;
    let y_mean = y.mean().ok_or("empty y")?;
    let at_mean = model.predict(&array![[x_mean]])?;

    assert!((at_mean[0] - y_mean).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_saved_model_reproduces_predictions() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let config = fixture_config(tmp.path());
    let report = pipeline::run(&config)?;

    let loaded = LinearModel::<Fitted>::load_from_file(tmp.path().join("model.bin"))?;
    assert_eq!(loaded.intercept(), report.intercept);
    assert_eq!(loaded.coefficients()[0], report.slope);
    assert_eq!(loaded.predict(&array![[37_655.2]])?, report.predictions);
    Ok(())
}

#[test]
fn test_missing_column_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let config = PipelineConfig {
        y_column: "Nonexistent Column".to_string(),
        ..fixture_config(tmp.path())
    };

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, LifesatError::MissingColumn { ref name, .. } if name == "Nonexistent Column"));
}

#[test]
fn test_missing_source_fails() {
    let config = PipelineConfig {
        source: DataSource::Path(PathBuf::from("does/not/exist.csv")),
        chart: None,
        ..PipelineConfig::default()
    };

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, LifesatError::Io(_)));
}
