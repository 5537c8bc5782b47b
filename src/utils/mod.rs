pub mod config;
pub mod errors;

pub use config::{AppConfig, LoggingConfig, StorageConfig, TokenizationConfig};
pub use errors::{CsvTokenizerError, Result};
