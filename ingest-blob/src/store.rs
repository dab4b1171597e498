use async_trait::async_trait;
use bytes::Bytes;

use crate::BlobResult;

/// Write-only object storage. Implementations overwrite existing keys.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `body` under `key`.
    async fn put(&self, key: &str, body: Bytes) -> BlobResult<PutResult>;
}

/// Result of a successful put operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutResult {
    pub etag: Option<String>,
    pub size_bytes: u64,
}

impl PutResult {
    pub fn new(size_bytes: u64) -> Self {
        Self {
            etag: None,
            size_bytes,
        }
    }

    pub fn with_etag(mut self, etag: Option<String>) -> Self {
        self.etag = etag;
        self
    }
}
