use crate::storage::BlobStore;
use crate::utils::{CsvTokenizerError, Result, StorageConfig};
use async_trait::async_trait;
use std::path::PathBuf;

/// Filesystem-backed blob store: keys are relative paths under a container
/// directory. Writes create missing parent directories and overwrite any
/// existing object.
pub struct FsBlobStore {
    container_root: PathBuf,
}

impl FsBlobStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            container_root: config.root.join(&config.container),
        }
    }

    pub fn with_root(container_root: impl Into<PathBuf>) -> Self {
        Self {
            container_root: container_root.into(),
        }
    }

    fn resolve(&self, key: &str) -> PathBuf {
        self.container_root.join(key)
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn read(&self, key: &str) -> Result<Vec<u8>> {
        tokio::fs::read(self.resolve(key))
            .await
            .map_err(|source| CsvTokenizerError::StorageReadFailure {
                key: key.to_string(),
                source,
            })
    }

    async fn write(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|source| {
                CsvTokenizerError::StorageWriteFailure {
                    key: key.to_string(),
                    source,
                }
            })?;
        }

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| CsvTokenizerError::StorageWriteFailure {
                key: key.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::with_root(dir.path());

        store.write("secured/out.csv", b"Name\nAlice\n").await.unwrap();
        let bytes = store.read("secured/out.csv").await.unwrap();
        assert_eq!(bytes, b"Name\nAlice\n");
    }

    #[tokio::test]
    async fn write_overwrites_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::with_root(dir.path());

        store.write("secured/out.csv", b"first").await.unwrap();
        store.write("secured/out.csv", b"second").await.unwrap();
        assert_eq!(store.read("secured/out.csv").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn read_missing_key_is_storage_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::with_root(dir.path());

        let err = store.read("all/missing.csv").await.unwrap_err();
        match err {
            CsvTokenizerError::StorageReadFailure { key, .. } => {
                assert_eq!(key, "all/missing.csv")
            }
            other => panic!("expected StorageReadFailure, got {other:?}"),
        }
    }
}
