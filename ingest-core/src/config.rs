//! # Ingest configuration
//!
//! A single immutable value built once at startup and handed to the
//! request handler. Nothing in the request path reads process globals.
//!
//! ```rust
//! use ingest_core::IngestConfig;
//!
//! let config = IngestConfig::new("uploads").with_port(9000);
//!
//! assert_eq!(config.bucket, "uploads");
//! assert_eq!(config.port, 9000);
//! assert_eq!(config.region, "us-east-1");
//! ```
//!
//! Credentials and endpoints are not part of this value; the blob store
//! resolves them from the ambient SDK configuration.

use anyhow::{bail, Result};

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestConfig {
    pub host: String,
    pub port: u16,
    /// Target bucket. Required, no default.
    pub bucket: String,
    pub region: String,
}

impl IngestConfig {
    /// Create a config for `bucket` with default host, port and region.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            bucket: bucket.into(),
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Reject configurations the server cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.bucket.trim().is_empty() {
            bail!("a target bucket is required");
        }
        if self.region.trim().is_empty() {
            bail!("region must not be empty");
        }
        Ok(())
    }

    /// `host:port` suitable for binding a listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
