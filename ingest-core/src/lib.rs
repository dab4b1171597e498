//! ingest-core: transport-agnostic pieces of s3-ingest.
//!
//! Everything here is pure: configuration values, the error type carried
//! through `anyhow`, the metadata part schema and the object key rules.

pub mod config;
pub mod errors;
pub mod metadata;
pub mod paths;

pub use config::IngestConfig;
pub use errors::{ErrorKind, IngestError};
pub use metadata::UploadMetadata;
pub use paths::{join_key, split_path, ObjectKeys, METADATA_LOG_SUFFIX};
