use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub tokenization: TokenizationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub root: PathBuf,
    pub container: String,
    pub input_prefix: String,
    pub output_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizationConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub sensitive_column: String,
    pub tokenized_column: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                root: PathBuf::from("./data"),
                container: "csv".to_string(),
                input_prefix: "all".to_string(),
                output_prefix: "secured".to_string(),
            },
            tokenization: TokenizationConfig {
                endpoint: "http://localhost:7071/api/tokenize".to_string(),
                timeout_seconds: 30,
                sensitive_column: "Credit_Card_Number".to_string(),
                tokenized_column: "CREDIT_CARD_NUMBER".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> crate::utils::errors::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::utils::errors::CsvTokenizerError::ConfigError(e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| crate::utils::errors::CsvTokenizerError::ConfigError(e.to_string()))
    }

    pub fn load_or_default(path: Option<&str>) -> Self {
        if let Some(p) = path {
            Self::load_from_file(p).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}
