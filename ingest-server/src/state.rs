use std::sync::Arc;

use ingest_blob::BlobStore;
use ingest_core::IngestConfig;

/// Shared by every request. Read-only after startup.
#[derive(Clone)]
pub struct IngestState {
    pub config: Arc<IngestConfig>,
    pub store: Arc<dyn BlobStore>,
}

impl IngestState {
    pub fn new(config: IngestConfig, store: Arc<dyn BlobStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.config.bucket
    }
}
