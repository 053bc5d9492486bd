// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use articles_api::application::ports::ClockPort;
use articles_api::application::services::ApplicationServices;
use articles_api::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use articles_api::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

/// Wire the application services around any repository that serves both
/// the read and write side.
pub fn build_test_state<R>(repo: Arc<R>, clock: Arc<ClockPort>) -> HttpState
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    let write: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read: Arc<dyn ArticleReadRepository> = repo;
    HttpState {
        services: Arc::new(ApplicationServices::new(write, read, clock)),
    }
}

pub fn make_router_with<R>(repo: Arc<R>, clock: Arc<ClockPort>) -> Router
where
    R: ArticleReadRepository + ArticleWriteRepository + 'static,
{
    build_router(build_test_state(repo, clock), &["*".to_string()])
}

/// Router over an empty in-memory store and a fixed clock. The store is
/// returned so tests can inspect it.
pub fn make_test_router() -> (Router, Arc<mocks::InMemoryArticleRepo>) {
    let repo = Arc::new(mocks::InMemoryArticleRepo::new());
    let router = make_router_with(repo.clone(), Arc::new(mocks::FixedClock));
    (router, repo)
}

/// Router whose every datastore call fails.
pub fn make_failing_router() -> Router {
    make_router_with(Arc::new(mocks::FailingArticleRepo), Arc::new(mocks::FixedClock))
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Send a request and return the status with the decoded JSON body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, read_json(resp).await)
}

/// Checks status, the machine-readable `code` and a non-empty `message`.
/// Returns the body for further assertions.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let code = json.get("code").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(code, expected_code, "unexpected code field: {json}");
    assert!(!message.is_empty(), "expected non-empty message in {json}");
    json
}

/// POST a valid article and return its JSON representation.
pub async fn create_article(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, json_request(Method::POST, "/articles", &payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body
}
