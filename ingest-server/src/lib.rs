pub mod cli;
pub mod handler;
mod state;

use std::sync::Arc;

use axum::Router;
use ingest_axum::AxumApp;
use ingest_blob::BlobStore;
use ingest_core::IngestConfig;

pub use handler::{GET_BODY, METHOD_NOT_ALLOWED_BODY};
pub use state::IngestState;

/// Build the ingest app. Every path and method lands on the one handler.
pub fn build(config: IngestConfig, store: Arc<dyn BlobStore>) -> AxumApp {
    let state = IngestState::new(config, store);

    let router = Router::new()
        .fallback(handler::ingest)
        .with_state(state);

    ingest_axum::axum(router).with_request_tracing()
}
