use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ingest_core::errors::IngestError;
use tracing::error;

#[derive(Debug)]
pub struct IngestAxumError(pub anyhow::Error);

impl From<anyhow::Error> for IngestAxumError {
    fn from(e: anyhow::Error) -> Self {
        Self(e)
    }
}

impl From<IngestError> for IngestAxumError {
    fn from(e: IngestError) -> Self {
        Self(e.into_anyhow())
    }
}

impl IntoResponse for IngestAxumError {
    fn into_response(self) -> Response {
        // IngestError anywhere in the chain decides status and body
        if let Some(err) = IngestError::find_in(&self.0) {
            let status = StatusCode::from_u16(err.code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (status, err.message.clone()).into_response();
        }

        error!(error = %self.0, "unhandled error");
        let err = IngestError::general_error(self.0.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, err.message).into_response()
    }
}
