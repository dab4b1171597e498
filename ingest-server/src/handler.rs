//! The ingest handler.
//!
//! `GET` describes the service, `POST` takes a multipart form with an
//! optional `metadata` part and one file part, stores both and answers with
//! the two object keys. Uploads run one after the other, metadata first,
//! and are never retried.

use std::fmt::Write;

use axum::{
    extract::{Request, State},
    http::Method,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use ingest_axum::{IngestAxumError, MultipartForm};
use ingest_core::{IngestError, ObjectKeys, UploadMetadata};
use tracing::{debug, info, warn};

use crate::IngestState;

pub const GET_BODY: &str =
    "This server sends files data to AWS S3. Note: Only multipart/form-data is accepted.";
pub const METHOD_NOT_ALLOWED_BODY: &str = "Only GET and POST methods are supported.";

const METADATA_PART: &str = "metadata";

pub async fn ingest(
    State(state): State<IngestState>,
    req: Request,
) -> Result<Response, IngestAxumError> {
    let method = req.method().clone();
    match method {
        Method::GET => Ok(GET_BODY.into_response()),
        Method::POST => {
            let keys = store_submission(&state, req).await?;
            Ok(Json(keys.into_vec()).into_response())
        }
        _ => Err(IngestError::method_not_allowed(METHOD_NOT_ALLOWED_BODY).into()),
    }
}

#[derive(Debug)]
struct FileUpload {
    filename: String,
    data: Bytes,
}

/// Everything collected from one form, before any upload.
#[derive(Debug, Default)]
struct Submission {
    metadata: UploadMetadata,
    metadata_bytes: Bytes,
    file: Option<FileUpload>,
}

impl Submission {
    fn filename(&self) -> &str {
        self.file.as_ref().map(|f| f.filename.as_str()).unwrap_or_default()
    }
}

async fn store_submission(state: &IngestState, req: Request) -> Result<ObjectKeys, IngestError> {
    let form = MultipartForm::from_request(req)
        .map_err(|err| IngestError::unsupported_media_type(err.to_string()))?;

    let submission = read_submission(form).await?;
    let keys = ObjectKeys::derive(submission.metadata.root(), submission.filename());

    upload(state, &keys.metadata_key, submission.metadata_bytes).await?;

    let file_data = submission.file.map(|f| f.data).unwrap_or_default();
    upload(state, &keys.file_key, file_data).await?;

    info!(
        metadata_key = %keys.metadata_key,
        file_key = %keys.file_key,
        bucket = %state.bucket(),
        "ingested upload"
    );
    Ok(keys)
}

/// Read every part. A later file part replaces an earlier one; a part that
/// is neither `metadata` nor a file stops the read.
async fn read_submission(mut form: MultipartForm) -> Result<Submission, IngestError> {
    let mut submission = Submission::default();

    while let Some(part) = form
        .next_part()
        .await
        .map_err(|err| IngestError::unsupported_media_type(err.to_string()))?
    {
        debug!(name = ?part.name, filename = ?part.filename, size = part.data.len(), "form part");

        if part.is_named(METADATA_PART) {
            if let Err(err) = submission.metadata.apply_json(&part.data) {
                warn!(error = %err, "ignoring undecodable metadata part");
            }
            submission.metadata_bytes = part.data;
            continue;
        }

        let Some(filename) = part.filename().map(str::to_string) else {
            return Err(IngestError::unsupported_media_type(format!(
                "Unexpected data: {}",
                quote_bytes(&part.data)
            )));
        };

        if let Some(previous) = &submission.file {
            debug!(previous = %previous.filename, filename = %filename, "replacing earlier file part");
        }
        submission.file = Some(FileUpload {
            filename,
            data: part.data,
        });
    }

    Ok(submission)
}

async fn upload(state: &IngestState, key: &str, body: Bytes) -> Result<(), IngestError> {
    match state.store.put(key, body).await {
        Ok(put) => {
            debug!(key, size_bytes = put.size_bytes, etag = ?put.etag, "stored object");
            Ok(())
        }
        Err(err) => {
            warn!(key, bucket = %state.bucket(), error = %err, "upload failed");
            let message = format!("Unable to upload {:?} to {:?}, {}", key, state.bucket(), err);
            Err(IngestError::unprocessable(message).with_source(err.into()))
        }
    }
}

/// Double-quote `data` for an error body. Valid UTF-8 is escaped like a
/// Rust string literal, invalid bytes become `\xNN`.
fn quote_bytes(data: &[u8]) -> String {
    let mut out = String::from("\"");
    for chunk in data.utf8_chunks() {
        let valid = format!("{:?}", chunk.valid());
        out.push_str(&valid[1..valid.len() - 1]);
        for byte in chunk.invalid() {
            let _ = write!(out, "\\x{byte:02x}");
        }
    }
    out.push('"');
    out
}
