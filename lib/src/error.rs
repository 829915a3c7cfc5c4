//! Error types shared by every stage of the pipeline.

use thiserror::Error;

/// Errors raised while loading data, fitting, predicting or persisting a model.
#[derive(Error, Debug)]
pub enum LifesatError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The remote data source could not be fetched.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The CSV content is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A requested column is not present in the table.
    #[error("column {name:?} not found (available: {available:?})")]
    MissingColumn {
        /// The column that was requested.
        name: String,
        /// Columns the table actually has.
        available: Vec<String>,
    },

    /// Two header cells carry the same name.
    #[error("duplicate column {0:?}")]
    DuplicateColumn(String),

    /// A selected cell holds text where a number was required.
    #[error("column {column:?}, row {row}: {value:?} is not numeric")]
    NonNumeric {
        /// Column of the offending cell.
        column: String,
        /// Zero-based data row of the offending cell.
        row: usize,
        /// Raw cell content.
        value: String,
    },

    /// A selected cell is empty.
    #[error("column {column:?}, row {row}: missing value")]
    MissingValue {
        /// Column of the empty cell.
        column: String,
        /// Zero-based data row of the empty cell.
        row: usize,
    },

    /// Empty data provided where non-empty was required.
    #[error("empty data: {0}")]
    EmptyData(String),

    /// Feature matrix and target vector disagree on the number of samples.
    #[error("shape mismatch: x has {x_rows} rows, y has {y_len} values")]
    ShapeMismatch {
        /// Rows in the feature matrix.
        x_rows: usize,
        /// Length of the target vector.
        y_len: usize,
    },

    /// Input feature count differs from the one the model was fitted with.
    #[error("feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        /// Features the model was fitted with.
        expected_features: usize,
        /// Features in the input.
        got_features: usize,
    },

    /// Input contains NaN or infinity.
    #[error("non-finite value in {0}")]
    NonFinite(String),

    /// The normal equations have no unique solution.
    #[error("singular design matrix: features are constant or linearly dependent")]
    SingularMatrix,

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The chart could not be rendered.
    #[error("plot error: {0}")]
    Plot(String),
}

impl From<bincode::Error> for LifesatError {
    fn from(err: bincode::Error) -> Self {
        LifesatError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for LifesatError {
    fn from(err: serde_json::Error) -> Self {
        LifesatError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for LifesatError {
    fn from(err: reqwest::Error) -> Self {
        LifesatError::Http(err.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LifesatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_column() {
        let err = LifesatError::MissingColumn {
            name: "Nonexistent Column".to_string(),
            available: vec!["Country".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Nonexistent Column"));
        assert!(msg.contains("Country"));
    }

    #[test]
    fn test_error_display_shape_mismatch() {
        let err = LifesatError::ShapeMismatch { x_rows: 3, y_len: 2 };
        assert_eq!(err.to_string(), "shape mismatch: x has 3 rows, y has 2 values");
    }

    #[test]
    fn test_error_display_non_numeric() {
        let err = LifesatError::NonNumeric {
            column: "GDP".to_string(),
            row: 4,
            value: "n/a".to_string(),
        };
        assert!(err.to_string().contains("row 4"));
    }

    #[test]
    fn test_error_display_feature_mismatch() {
        let err = LifesatError::FeatureMismatch {
            expected_features: 1,
            got_features: 3,
        };
        assert_eq!(
            err.to_string(),
            "feature mismatch: expected 1 features, got 3"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: LifesatError = io_err.into();
        assert!(matches!(err, LifesatError::Io(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: std::result::Result<String, bincode::Error> =
            bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: LifesatError = e.into();
            assert!(matches!(err, LifesatError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = LifesatError::SingularMatrix;
        let _: &dyn std::error::Error = &err;
    }
}
