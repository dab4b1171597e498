use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::{BlobError, BlobResult, BlobStore, PutResult};

/// One accepted put, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPut {
    pub key: String,
    pub body: Bytes,
}

#[derive(Default)]
struct Inner {
    log: Vec<RecordedPut>,
    objects: HashMap<String, Bytes>,
    failing: HashSet<String>,
    attempts: Vec<String>,
}

/// In-process store that records every put.
///
/// Used for local runs without credentials and as the test double for the
/// ingest handler. Keys registered with [`MemoryBlobStore::fail_on`] fail
/// like an unreachable backend would.
#[derive(Clone, Default)]
pub struct MemoryBlobStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every put to `key` fail.
    pub fn fail_on(self, key: impl Into<String>) -> Self {
        self.inner.lock().failing.insert(key.into());
        self
    }

    /// Successful puts, oldest first.
    pub fn puts(&self) -> Vec<RecordedPut> {
        self.inner.lock().log.clone()
    }

    /// Every key a put was attempted for, including failed ones.
    pub fn attempted_keys(&self) -> Vec<String> {
        self.inner.lock().attempts.clone()
    }

    /// Current content stored under `key`.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.inner.lock().objects.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, body: Bytes) -> BlobResult<PutResult> {
        let mut inner = self.inner.lock();
        inner.attempts.push(key.to_string());

        if key.is_empty() {
            return Err(BlobError::invalid("object key must not be empty"));
        }
        if inner.failing.contains(key) {
            return Err(BlobError::backend_message(format!(
                "simulated backend failure for {key}"
            )));
        }

        let size_bytes = body.len() as u64;
        inner.objects.insert(key.to_string(), body.clone());
        inner.log.push(RecordedPut {
            key: key.to_string(),
            body,
        });

        Ok(PutResult::new(size_bytes))
    }
}
