//! # ingest-blob: object storage for s3-ingest
//!
//! The ingest handler needs exactly one storage primitive: write these bytes
//! under this key. `BlobStore` is that capability and nothing more.
//!
//! ```text
//! ┌──────────────────┐
//! │  Ingest handler  │  ← keys + bytes
//! ├──────────────────┤
//! │    BlobStore     │  ← put(key, bytes)
//! ├──────────────────┤
//! │ S3 │ Memory      │  ← backends
//! └──────────────────┘
//! ```
//!
//! ```rust
//! use ingest_blob::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> BlobResult<()> {
//! let store = MemoryBlobStore::new();
//! store.put("photos/beach.png", bytes::Bytes::from_static(b"png")).await?;
//!
//! assert_eq!(store.puts()[0].key, "photos/beach.png");
//! # Ok(())
//! # }
//! ```

mod error;
mod memory_store;
mod s3_store;
pub mod store;

pub use error::{BlobError, BlobResult};
pub use memory_store::{MemoryBlobStore, RecordedPut};
pub use s3_store::S3BlobStore;
pub use store::{BlobStore, PutResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BlobError, BlobResult, BlobStore, MemoryBlobStore, PutResult, S3BlobStore};
}
