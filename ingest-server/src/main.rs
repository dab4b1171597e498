use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use ingest_blob::{BlobStore, MemoryBlobStore, S3BlobStore};
use ingest_server::cli::Cli;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    let store: Arc<dyn BlobStore> = if cli.memory_store {
        warn!("using in-memory blob store, uploads are not persisted");
        Arc::new(MemoryBlobStore::new())
    } else {
        Arc::new(S3BlobStore::from_config(&config).await)
    };

    info!(bucket = %config.bucket, region = %config.region, "starting s3-ingest");

    let addr = config.listen_addr();
    ingest_server::build(config, store).listen(addr).await?;

    Ok(())
}
