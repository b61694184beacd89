//! Helpers for driving the assembled router and reading JSON responses.

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use football_manager::server::{model::app::AppState, router::routes};
use football_test_utils::{TestContext, TestError};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Extension trait for building the full application from a test context
pub trait TestContextExt {
    fn into_router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_router(&self) -> Router {
        routes().with_state(self.to_app_state::<AppState>())
    }
}

/// Send a request with a raw body through the router
pub async fn send_raw(router: &Router, method: Method, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// Send a request with a JSON body through the router
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    send_raw(router, method, uri, &body.to_string()).await
}

/// Send a request without a body through the router
pub async fn send_empty(router: &Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// Read a response body as JSON
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, TestError> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    Ok(serde_json::from_slice(&bytes)?)
}
