use crate::storage::BlobStore;
use crate::utils::{CsvTokenizerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory blob store, used in tests and for hermetic runs.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }

    pub async fn keys(&self) -> Vec<String> {
        self.objects.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn read(&self, key: &str) -> Result<Vec<u8>> {
        self.objects.read().await.get(key).cloned().ok_or_else(|| {
            CsvTokenizerError::StorageReadFailure {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such object"),
            }
        })
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.objects
            .write()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
