use std::fmt;

/// Error types for urlsweep operations.
///
/// These only cover startup, configuration and output failures. A URL that
/// cannot be fetched is not an error at this level; it is recorded as
/// [`crate::core::types::FetchStatus::NetworkError`].
#[derive(Debug)]
pub enum SweepError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Input file does not exist
    FileNotFound(String),

    /// Input file exists but could not be read as a URL list
    InvalidInput(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Report could not be written
    Output(String),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepError::Io(err) => write!(f, "IO error: {err}"),
            SweepError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SweepError::FileNotFound(path) => write!(f, "File not found: {path}"),
            SweepError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            SweepError::Http(err) => write!(f, "HTTP error: {err}"),
            SweepError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SweepError::Json(err) => write!(f, "JSON error: {err}"),
            SweepError::Output(msg) => write!(f, "Output error: {msg}"),
            SweepError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SweepError::Io(err) => Some(err),
            SweepError::Http(err) => Some(err),
            SweepError::TomlParsing(err) => Some(err),
            SweepError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        SweepError::Io(err)
    }
}

impl From<reqwest::Error> for SweepError {
    fn from(err: reqwest::Error) -> Self {
        SweepError::Http(err)
    }
}

impl From<toml::de::Error> for SweepError {
    fn from(err: toml::de::Error) -> Self {
        SweepError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        SweepError::Json(err)
    }
}

/// Type alias for Results using SweepError
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = SweepError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let file_error = SweepError::FileNotFound("urls.txt".to_string());
        assert_eq!(format!("{file_error}"), "File not found: urls.txt");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let sweep_error = SweepError::from(io_error);

        assert!(matches!(sweep_error, SweepError::Io(_)));
        assert!(format!("{sweep_error}").contains("IO error:"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let sweep_error = SweepError::from(toml_error);

        assert!(matches!(sweep_error, SweepError::TomlParsing(_)));
        assert!(sweep_error.source().is_some());
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let sweep_error = SweepError::from(json_error);

        assert!(matches!(sweep_error, SweepError::Json(_)));
        assert!(format!("{sweep_error}").starts_with("JSON error:"));
    }

    #[test]
    fn test_string_error_variants_have_no_source() {
        let errors = vec![
            SweepError::Config("bad config".to_string()),
            SweepError::FileNotFound("/missing".to_string()),
            SweepError::InvalidInput("not utf-8".to_string()),
            SweepError::Output("disk full".to_string()),
            SweepError::InvalidArgument("bad arg".to_string()),
        ];

        for error in errors {
            assert!(error.source().is_none());
            assert!(format!("{error}").contains(':'));
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sweep_error = SweepError::Io(io_error);

        let source = sweep_error.source().expect("io error should have a source");
        assert!(source.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SweepError>();
    }
}
