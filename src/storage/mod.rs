pub mod fs;
pub mod memory;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;

use crate::utils::Result;
use async_trait::async_trait;

/// Key-addressed blob storage. Objects are read and written wholesale;
/// writes overwrite any existing object under the same key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn read(&self, key: &str) -> Result<Vec<u8>>;
    async fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;
}
