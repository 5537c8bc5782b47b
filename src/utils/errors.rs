use thiserror::Error;

#[derive(Error, Debug)]
pub enum CsvTokenizerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("token count mismatch: expected {expected}, got {got}")]
    TokenCountMismatch { expected: usize, got: usize },

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("storage read failed for '{key}': {source}")]
    StorageReadFailure {
        key: String,
        source: std::io::Error,
    },

    #[error("storage write failed for '{key}': {source}")]
    StorageWriteFailure {
        key: String,
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, CsvTokenizerError>;

impl CsvTokenizerError {
    /// Parse-class failures abort the invocation and surface to the trigger
    /// runtime for its own retry policy.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            CsvTokenizerError::CsvError(_)
                | CsvTokenizerError::Utf8Error(_)
                | CsvTokenizerError::DuplicateColumn(_)
        )
    }
}
