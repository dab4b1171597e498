use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::routing::post;
use axum::Router;
use http_body_util::BodyExt;
use ingest_axum::{axum as ingest_app, IngestAxumError};
use ingest_core::IngestError;
use tower::ServiceExt;

async fn unprocessable() -> Result<&'static str, IngestAxumError> {
    Err(IngestError::unprocessable("Unable to upload \"k\" to \"b\", denied").into())
}

async fn wrapped_unsupported() -> Result<&'static str, IngestAxumError> {
    Err(IngestError::unsupported_media_type("not multipart")
        .into_anyhow()
        .context("reading form")
        .into())
}

async fn boom() -> Result<&'static str, IngestAxumError> {
    Err(anyhow::anyhow!("boom").into())
}

fn router() -> Router {
    Router::new()
        .route("/unprocessable", post(unprocessable))
        .route("/unsupported", post(wrapped_unsupported))
        .route("/boom", post(boom))
}

async fn text_body(res: axum::response::Response) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_to(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn ingest_error_sets_status_and_plain_body() {
    let ax = ingest_app(router());

    let res = ax.router.oneshot(post_to("/unprocessable")).await.unwrap();

    assert_eq!(res.status().as_u16(), 422);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(text_body(res).await, "Unable to upload \"k\" to \"b\", denied");
}

#[tokio::test]
async fn ingest_error_is_found_behind_context() {
    let ax = ingest_app(router());

    let res = ax.router.oneshot(post_to("/unsupported")).await.unwrap();

    assert_eq!(res.status().as_u16(), 415);
    assert_eq!(text_body(res).await, "not multipart");
}

#[tokio::test]
async fn other_errors_map_to_500() {
    let ax = ingest_app(router());

    let res = ax.router.oneshot(post_to("/boom")).await.unwrap();

    assert_eq!(res.status().as_u16(), 500);
    assert!(text_body(res).await.contains("boom"));
}

#[tokio::test]
async fn request_id_is_generated() {
    let ax = ingest_app(router()).with_request_tracing();

    let res = ax.router.oneshot(post_to("/boom")).await.unwrap();

    assert!(res.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn request_id_is_preserved_when_provided() {
    let ax = ingest_app(router()).with_request_tracing();

    let provided = HeaderValue::from_static("req-test-123");
    let res = ax
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/boom")
                .header("x-request-id", provided.clone())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.headers().get("x-request-id").unwrap(), &provided);
}
