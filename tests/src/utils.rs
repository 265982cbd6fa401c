use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use savrdeals_api::{create_router, AppState, Config};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub fn test_app() -> Result<Router> {
    test_app_with(Config::default())
}

pub fn test_app_with(config: Config) -> Result<Router> {
    let state = Arc::new(AppState::new(config)?);
    Ok(create_router(state))
}

/// Response status, headers, and raw body.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Result<TestResponse> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await?.to_bytes().to_vec();
    Ok(TestResponse {
        status,
        headers,
        body,
    })
}

pub async fn get(app: &Router, uri: &str) -> Result<TestResponse> {
    send(app, Request::builder().uri(uri).body(Body::empty())?).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Result<TestResponse> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body)?))?;
    send(app, request).await
}
