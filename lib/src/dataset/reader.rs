//! CSV parsing into a [`Table`].

use super::{Column, DataSource, Table, Value};
use crate::error::{LifesatError, Result};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

impl Table {
    /// Parses CSV with a header row.
    ///
    /// Records with a different number of fields than the header are rejected.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
        let mut cells: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

        for result in rdr.records() {
            let record = result?;
            for (column, cell) in cells.iter_mut().zip(record.iter()) {
                column.push(Value::parse(cell));
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, values)| Column::new(name, values))
            .collect();
        Table::new(columns)
    }

    /// Reads a CSV file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.as_ref().display(),
            rows = table.n_rows(),
            "read csv file"
        );
        Ok(table)
    }

    /// Downloads a CSV document over HTTP(S).
    ///
    /// Non-success status codes are reported as [`LifesatError::Http`].
    pub fn from_url(url: &str) -> Result<Self> {
        let response = reqwest::blocking::get(url)?.error_for_status()?;
        let body = response.bytes()?;
        if body.is_empty() {
            return Err(LifesatError::EmptyData(format!("{url} returned no content")));
        }
        let table = Self::from_reader(body.as_ref())?;
        debug!(url, bytes = body.len(), rows = table.n_rows(), "fetched csv");
        Ok(table)
    }

    /// Loads from whichever kind of source is given.
    pub fn load(source: &DataSource) -> Result<Self> {
        match source {
            DataSource::Path(path) => Self::from_path(path),
            DataSource::Url(url) => Self::from_url(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "Country,GDP per capita (USD),Life satisfaction\n\
                       Alpha,24000,5.0\n\
                       Bravo,26000,5.6\n\
                       Charlie,,5.8\n";

    #[test]
    fn test_from_reader_classifies_cells() {
        let table = Table::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(
            table.column_names(),
            vec!["Country", "GDP per capita (USD)", "Life satisfaction"]
        );
        let gdp = table.column("GDP per capita (USD)").unwrap();
        assert_eq!(gdp.values()[0], Value::Number(24000.0));
        assert_eq!(gdp.values()[2], Value::Missing);
        assert!(table.column("Life satisfaction").unwrap().is_numeric());
        assert!(!table.column("Country").unwrap().is_numeric());
    }

    #[test]
    fn test_from_reader_trims_headers() {
        let table = Table::from_reader(" a , b \n1,2\n".as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_from_reader_quoted_fields() {
        let table = Table::from_reader("name,value\n\"Korea, Rep.\",3\n".as_bytes()).unwrap();
        assert_eq!(
            table.column("name").unwrap().values()[0],
            Value::Text("Korea, Rep.".into())
        );
    }

    #[test]
    fn test_from_reader_rejects_ragged_rows() {
        let err = Table::from_reader("a,b\n1,2\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LifesatError::Csv(_)));
    }

    #[test]
    fn test_from_reader_header_only() {
        let table = Table::from_reader("a,b\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.n_columns(), 2);
    }

    #[test]
    fn test_from_path_roundtrip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CSV.as_bytes())?;

        let table = Table::load(&DataSource::Path(file.path().to_path_buf()))?;
        assert_eq!(table.n_rows(), 3);
        Ok(())
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Table::from_path("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LifesatError::Io(_)));
    }
}
