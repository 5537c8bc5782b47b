use crate::csv_processor::{parse_document, write_document};
use crate::storage::BlobStore;
use crate::tokenization::TokenClient;
use crate::utils::{AppConfig, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Outcome of processing one inbound object. A skip is a successful,
/// output-less run, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Written { key: String, rows: usize },
    SkippedMissingColumn,
}

/// Orchestrates one invocation: parse the payload, tokenize the sensitive
/// column, write the transformed file to the output prefix. Stateless
/// across invocations.
pub struct Pipeline {
    config: AppConfig,
    client: TokenClient,
    store: Arc<dyn BlobStore>,
}

impl Pipeline {
    pub fn new(config: AppConfig, store: Arc<dyn BlobStore>) -> Self {
        let client = TokenClient::new(&config.tokenization);
        Self {
            config,
            client,
            store,
        }
    }

    pub async fn process(&self, object_key: &str, payload: &[u8]) -> Result<PipelineOutcome> {
        info!(key = %object_key, "Processing inbound object");

        let mut document = parse_document(payload)?;

        let sensitive = &self.config.tokenization.sensitive_column;
        if !document.has_column(sensitive) {
            warn!(
                key = %object_key,
                column = %sensitive,
                "Missing sensitive column, skipping file"
            );
            return Ok(PipelineOutcome::SkippedMissingColumn);
        }

        let values = document
            .column_values(sensitive)
            .unwrap_or_default();

        // Fail-open: a failed exchange degrades the output to null tokens
        // instead of aborting the invocation.
        let tokens = match self.client.tokenize(&values).await {
            Ok(tokens) => tokens,
            Err(e) => {
                error!(key = %object_key, error = %e, "Tokenization API error, writing null tokens");
                vec![None; values.len()]
            }
        };

        document.replace_column(
            sensitive,
            &self.config.tokenization.tokenized_column,
            tokens,
        )?;

        let bytes = write_document(&document)?;
        let output_key = output_key_for(object_key, &self.config.storage.output_prefix);

        self.store.write(&output_key, &bytes).await?;

        info!(
            key = %output_key,
            rows = document.row_count(),
            "Tokenized file uploaded"
        );

        Ok(PipelineOutcome::Written {
            key: output_key,
            rows: document.row_count(),
        })
    }
}

/// Output key: the fixed output prefix plus the input key's base name.
/// Any subpath segments of the input key are dropped.
pub fn output_key_for(object_key: &str, output_prefix: &str) -> String {
    let basename = object_key.rsplit('/').next().unwrap_or(object_key);
    format!("{}/{}", output_prefix, basename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_key_uses_basename_only() {
        assert_eq!(output_key_for("all/cards.csv", "secured"), "secured/cards.csv");
        assert_eq!(
            output_key_for("all/2024/08/cards.csv", "secured"),
            "secured/cards.csv"
        );
        assert_eq!(output_key_for("cards.csv", "secured"), "secured/cards.csv");
    }
}
