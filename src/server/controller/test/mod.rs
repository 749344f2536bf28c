use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::{Config, Environment},
    router::router,
    state::AppState,
};


/// Builds the full router over a fresh in-memory document table.
///
/// The returned context owns the database and must outlive the router's use.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_document_table()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 4000,
        environment: Environment::Test,
    };

    (test, router(AppState::new(db, config)))
}

/// Sends one request and returns the status with the body parsed as JSON.
///
/// Non-JSON bodies are returned as a JSON string.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}
