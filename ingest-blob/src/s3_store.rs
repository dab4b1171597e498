use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::{primitives::ByteStream as AwsByteStream, Client};
use bytes::Bytes;
use ingest_core::IngestConfig;
use tracing::debug;

use crate::{BlobError, BlobResult, BlobStore, PutResult};

/// S3 store backed by the AWS SDK.
///
/// The client is built once; credentials and endpoint come from the default
/// provider chain (environment, profile, instance metadata, `AWS_ENDPOINT_URL`).
#[derive(Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub async fn from_config(config: &IngestConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self::new(Client::new(&sdk_config), config.bucket.clone())
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn map_aws_error<E>(err: E) -> BlobError
    where
        E: std::error::Error,
    {
        BlobError::backend_message(DisplayErrorContext(err).to_string())
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    async fn put(&self, key: &str, body: Bytes) -> BlobResult<PutResult> {
        let size_bytes = body.len() as u64;
        debug!(bucket = %self.bucket, key, size_bytes, "put_object");

        let result = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(AwsByteStream::from(body))
            .send()
            .await
            .map_err(Self::map_aws_error)?;

        Ok(PutResult::new(size_bytes).with_etag(result.e_tag().map(str::to_string)))
    }
}
