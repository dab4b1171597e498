use anyhow::Result;
use clap::Parser;
use ingest_core::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_REGION};
use ingest_core::IngestConfig;

/// Store multipart uploads and their metadata in an S3 bucket.
#[derive(Debug, Parser)]
#[command(name = "s3-ingest", version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "INGEST_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to launch server on
    #[arg(long, env = "INGEST_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// S3 bucket name to send files to
    #[arg(long, env = "INGEST_BUCKET")]
    pub bucket: String,

    /// AWS region
    #[arg(long, env = "INGEST_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Keep uploads in process memory instead of S3
    #[arg(long)]
    pub memory_store: bool,
}

impl Cli {
    pub fn config(&self) -> Result<IngestConfig> {
        let config = IngestConfig::new(self.bucket.clone())
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_region(self.region.clone());
        config.validate()?;
        Ok(config)
    }
}
