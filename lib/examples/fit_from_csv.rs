//! Fit the life-satisfaction line from a local CSV and inspect the model.
//!
//! Run with: cargo run --example fit_from_csv -- lib/tests/data/lifesat_sample.csv

use lifesat::dataset::Table;
use lifesat::model::linear::LinearRegression;
use lifesat::model::InferenceModel;
use lifesat::pipeline::{format_prediction, CYPRUS_GDP_PER_CAPITA, GDP_COLUMN, LIFE_SATISFACTION_COLUMN};
use ndarray::array;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: fit_from_csv <path/to/lifesat.csv>")?;

    let table = Table::from_path(&path)?;
    println!("Loaded {} rows with columns {:?}", table.n_rows(), table.column_names());

    let (x, y) = table.select_columns(GDP_COLUMN, LIFE_SATISFACTION_COLUMN)?;
    let model = LinearRegression::new().fit(&x, &y)?;
    let metrics = model.evaluate(&x, &y)?;

    println!(
        "life_satisfaction = {:.4} + {:.4e} * gdp_per_capita",
        model.intercept(),
        model.coefficients()[0]
    );
    println!("R² = {:.4}, RMSE = {:.4}", metrics.r2, metrics.rmse);

    let prediction = model.predict(&array![[CYPRUS_GDP_PER_CAPITA]])?;
    println!("Cyprus: {}", format_prediction(prediction.view()));
    Ok(())
}
