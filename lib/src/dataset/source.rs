//! Where a table comes from.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Location of a CSV resource: a local file or an `http(s)://` URL.
///
/// Parsed from a string; anything that does not start with `http://` or `https://`
/// is taken as a filesystem path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn is_remote(&self) -> bool {
        matches!(self, DataSource::Url(_))
    }
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for DataSource {
    fn from(s: String) -> Self {
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(s)
        } else {
            DataSource::Path(PathBuf::from(s))
        }
    }
}

impl From<DataSource> for String {
    fn from(source: DataSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let source: DataSource = "https://example.com/lifesat.csv".parse().unwrap();
        assert_eq!(
            source,
            DataSource::Url("https://example.com/lifesat.csv".into())
        );
        assert!(source.is_remote());
        assert!(DataSource::from("HTTP://EXAMPLE.COM/a.csv".to_string()).is_remote());
    }

    #[test]
    fn test_parse_path() {
        let source: DataSource = "data/lifesat.csv".parse().unwrap();
        assert_eq!(source, DataSource::Path(PathBuf::from("data/lifesat.csv")));
        assert!(!source.is_remote());
    }

    #[test]
    fn test_serde_as_string() {
        let source = DataSource::Url("https://example.com/x.csv".into());
        let json = serde_json::to_string(&source).unwrap();
        assert_eq!(json, "\"https://example.com/x.csv\"");
        let back: DataSource = serde_json::from_str("\"local.csv\"").unwrap();
        assert_eq!(back, DataSource::Path(PathBuf::from("local.csv")));
    }
}
