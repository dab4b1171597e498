//! ingest-axum: Axum adapter for s3-ingest.
//!
//! Wraps a router with request-id and trace layers, reads multipart
//! forms part by part, and renders `IngestError`s as plain-text responses.

pub mod app;
pub mod multipart;
mod error;

pub use app::{axum, AxumApp};
pub use error::IngestAxumError;
pub use multipart::{FormPart, MultipartForm};
