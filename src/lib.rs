pub mod csv_processor;
pub mod pipeline;
pub mod storage;
pub mod tokenization;
pub mod utils;

pub use csv_processor::{parse_document, write_document, TabularDocument};
pub use pipeline::{output_key_for, Pipeline, PipelineOutcome};
pub use storage::{BlobStore, FsBlobStore, MemoryBlobStore};
pub use tokenization::TokenClient;
pub use utils::{AppConfig, CsvTokenizerError, Result};
