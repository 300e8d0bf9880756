use std::fmt;

/// Error types for patentdash operations
#[derive(Debug)]
pub enum DashError {
    /// IO error (file operations, socket binding, etc.)
    Io(std::io::Error),

    /// CSV reading error
    Csv(csv::Error),

    /// Figure serialization error
    Json(serde_json::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Configuration error
    Config(String),

    /// Malformed dataset content (bad dates, bad numbers, ragged rows)
    Data(String),

    /// File not found error
    FileNotFound(String),

    /// Selected period is not part of the precomputed index
    UnknownPeriod(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// HTTP server error
    Server(String),
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Io(err) => write!(f, "IO error: {err}"),
            DashError::Csv(err) => write!(f, "CSV error: {err}"),
            DashError::Json(err) => write!(f, "JSON error: {err}"),
            DashError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            DashError::Config(msg) => write!(f, "Configuration error: {msg}"),
            DashError::Data(msg) => write!(f, "Data error: {msg}"),
            DashError::FileNotFound(path) => write!(f, "File not found: {path}"),
            DashError::UnknownPeriod(value) => write!(f, "Unknown period: {value}"),
            DashError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            DashError::Server(msg) => write!(f, "Server error: {msg}"),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Io(err) => Some(err),
            DashError::Csv(err) => Some(err),
            DashError::Json(err) => Some(err),
            DashError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        DashError::Io(err)
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        DashError::Csv(err)
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Json(err)
    }
}

impl From<toml::de::Error> for DashError {
    fn from(err: toml::de::Error) -> Self {
        DashError::TomlParsing(err)
    }
}

/// Type alias for Results using DashError
pub type Result<T> = std::result::Result<T, DashError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = DashError::Config("Port cannot be 0".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Port cannot be 0"
        );

        let file_error = DashError::FileNotFound("/data/ipc_counts.csv".to_string());
        assert_eq!(
            format!("{file_error}"),
            "File not found: /data/ipc_counts.csv"
        );

        let period_error = DashError::UnknownPeriod("1999-03-31".to_string());
        assert_eq!(format!("{period_error}"), "Unknown period: 1999-03-31");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let dash_error = DashError::from(io_error);

        match dash_error {
            DashError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_from_csv() {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader("a,b\nc\n".as_bytes());
        let csv_error = reader
            .records()
            .find_map(|record| record.err())
            .expect("ragged input should fail");
        let dash_error = DashError::from(csv_error);

        assert!(matches!(dash_error, DashError::Csv(_)));
        assert!(dash_error.source().is_some());
        assert!(format!("{dash_error}").starts_with("CSV error:"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let dash_error = DashError::from(json_error);

        assert!(matches!(dash_error, DashError::Json(_)));
        assert!(format!("{dash_error}").contains("JSON error:"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let dash_error = DashError::from(toml_error);

        match dash_error {
            DashError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_no_source_variants() {
        let errors_without_source = vec![
            DashError::Config("test".to_string()),
            DashError::Data("test".to_string()),
            DashError::FileNotFound("test".to_string()),
            DashError::UnknownPeriod("test".to_string()),
            DashError::InvalidArgument("test".to_string()),
            DashError::Server("test".to_string()),
        ];

        for error in errors_without_source {
            assert!(error.source().is_none());
            assert!(format!("{error}").contains(':'));
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dash_error = DashError::Io(io_error);

        let source = dash_error.source();
        assert!(source.is_some());
        assert!(format!("{}", source.unwrap()).contains("file not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DashError>();
    }
}
