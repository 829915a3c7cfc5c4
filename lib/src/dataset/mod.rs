//! Tabular data loaded from CSV and the column selection that feeds the model.
//!
//! A [`Table`] is an ordered collection of rows, each mapping a column name to a
//! [`Value`]. It is stored column-major because every consumer in this crate works on
//! whole columns: the model wants a feature matrix `x` of shape `(n_samples, n_features)`
//! and a target vector `y` of shape `(n_samples,)`, and the chart wants `(x, y)` pairs.
//!
//! # Example
//!
//! ```rust
//! use lifesat::dataset::Table;
//!
//! let csv = "Country,GDP per capita (USD),Life satisfaction\n\
//!            A,24000,5.0\n\
//!            B,26000,5.6\n";
//! let table = Table::from_reader(csv.as_bytes()).unwrap();
//! let (x, y) = table
//!     .select_columns("GDP per capita (USD)", "Life satisfaction")
//!     .unwrap();
//! assert_eq!(x.shape(), &[2, 1]);
//! assert_eq!(y.len(), 2);
//! ```
//!
//! Table construction from files and URLs lives in [`reader`] and [`source`].

use crate::error::{LifesatError, Result};
use ndarray::{Array1, Array2};
use std::collections::HashSet;
use std::fmt;

pub mod reader;
pub mod source;
pub use self::source::DataSource;

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A cell that parses as a finite or infinite float.
    Number(f64),
    /// Any other non-empty cell.
    Text(String),
    /// An empty cell, or an explicit `NaN`.
    Missing,
}

impl Value {
    /// Classifies a raw CSV cell.
    ///
    /// Surrounding whitespace is ignored. `NaN` is treated as missing rather than as a number.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_nan() => Value::Missing,
            Ok(v) => Value::Number(v),
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }

    /// Returns the numeric content, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
            Value::Missing => Ok(()),
        }
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when every cell is a number.
    pub fn is_numeric(&self) -> bool {
        self.values.iter().all(|v| matches!(v, Value::Number(_)))
    }

    /// Converts the column to a numeric vector.
    ///
    /// # Errors
    ///
    /// - [`LifesatError::MissingValue`] for the first empty cell
    /// - [`LifesatError::NonNumeric`] for the first text cell
    pub fn to_array(&self) -> Result<Array1<f64>> {
        self.values
            .iter()
            .enumerate()
            .map(|(row, value)| match value {
                Value::Number(v) => Ok(*v),
                Value::Missing => Err(LifesatError::MissingValue {
                    column: self.name.clone(),
                    row,
                }),
                Value::Text(s) => Err(LifesatError::NonNumeric {
                    column: self.name.clone(),
                    row,
                    value: s.clone(),
                }),
            })
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from)
    }
}

/// An immutable, column-major table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Builds a table from columns of equal length with unique names.
    ///
    /// # Errors
    ///
    /// - [`LifesatError::DuplicateColumn`] if two columns share a name
    /// - [`LifesatError::ShapeMismatch`] if column lengths differ
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(LifesatError::DuplicateColumn(column.name().to_string()));
            }
        }

        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(LifesatError::ShapeMismatch {
                x_rows: n_rows,
                y_len: bad.len(),
            });
        }

        Ok(Self { columns, n_rows })
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in header order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Looks up a column by exact name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| LifesatError::MissingColumn {
                name: name.to_string(),
                available: self.column_names().into_iter().map(String::from).collect(),
            })
    }

    /// Returns row `index` as `(column name, cell)` pairs in header order.
    pub fn row(&self, index: usize) -> Option<Vec<(&str, &Value)>> {
        if index >= self.n_rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name(), &c.values()[index]))
                .collect(),
        )
    }

    /// Extracts a column as a numeric vector.
    pub fn numeric_column(&self, name: &str) -> Result<Array1<f64>> {
        self.column(name)?.to_array()
    }

    /// Extracts one feature column and one target column.
    ///
    /// The feature is reshaped to `(n_samples, 1)` so it can be passed straight to
    /// [`LinearRegression::fit`](crate::model::linear::LinearRegression).
    ///
    /// # Errors
    ///
    /// - [`LifesatError::MissingColumn`] if either name is absent
    /// - [`LifesatError::EmptyData`] if the table has no rows
    /// - [`LifesatError::MissingValue`] / [`LifesatError::NonNumeric`] for bad cells
    pub fn select_columns(&self, x_col: &str, y_col: &str) -> Result<(Array2<f64>, Array1<f64>)> {
        self.select_features(&[x_col], y_col)
    }

    /// Extracts several feature columns (in the given order) and one target column.
    pub fn select_features(
        &self,
        x_cols: &[&str],
        y_col: &str,
    ) -> Result<(Array2<f64>, Array1<f64>)> {
        if x_cols.is_empty() {
            return Err(LifesatError::EmptyData("no feature columns requested".into()));
        }

        let features = x_cols
            .iter()
            .map(|name| self.numeric_column(name))
            .collect::<Result<Vec<_>>>()?;
        let y = self.numeric_column(y_col)?;

        if self.is_empty() {
            return Err(LifesatError::EmptyData("table has no rows".into()));
        }

        let mut x = Array2::zeros((self.n_rows, x_cols.len()));
        for (j, column) in features.iter().enumerate() {
            x.column_mut(j).assign(column);
        }
        Ok((x, y))
    }

    /// Returns `(x, y)` pairs for plotting, skipping rows where either cell is not a number.
    pub fn points(&self, x_col: &str, y_col: &str) -> Result<Vec<(f64, f64)>> {
        let xs = self.column(x_col)?.values();
        let ys = self.column(y_col)?.values();
        Ok(xs
            .iter()
            .zip(ys)
            .filter_map(|(x, y)| Some((x.as_f64()?, y.as_f64()?)))
            .collect())
    }
}
