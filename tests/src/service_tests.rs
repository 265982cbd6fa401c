//! Health, metrics, and request correlation.

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use savrdeals_api::Config;
use serde_json::json;

use crate::utils::{get, send, test_app, test_app_with};

#[tokio::test]
async fn test_health_reports_catalog_and_request_count() -> Result<()> {
    let app = test_app()?;
    get(&app, "/badges").await?;
    get(&app, "/badges/status?coins=3").await?;

    let res = get(&app, "/health").await?;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json()?;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["catalog_size"], json!(6));
    assert_eq!(body["requests"], json!(2));
    Ok(())
}

#[tokio::test]
async fn test_metrics_exposition() -> Result<()> {
    let app = test_app()?;
    get(&app, "/badges").await?;

    let res = get(&app, "/metrics").await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.headers.get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/plain; version=0.0.4")
    );
    let text = res.text();
    assert!(text.contains("# TYPE savrdeals_requests_total counter"));
    assert!(text.contains("savrdeals_badge_catalog_size 6\n"));
    Ok(())
}

#[tokio::test]
async fn test_request_id_is_echoed() -> Result<()> {
    let app = test_app()?;
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "trace-abc-123")
        .body(Body::empty())?;
    let res = send(&app, request).await?;
    assert_eq!(
        res.headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("trace-abc-123")
    );
    Ok(())
}

#[tokio::test]
async fn test_request_id_is_generated() -> Result<()> {
    let app = test_app()?;
    let res = get(&app, "/health").await?;
    let id = res
        .headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(id.starts_with("sav-"), "got {id:?}");
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_404() -> Result<()> {
    let app = test_app()?;
    let res = get(&app, "/listings").await?;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_cors_preflight() -> Result<()> {
    let app = test_app()?;
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/deals/hot")
        .header("origin", "https://savrdeals.app")
        .header("access-control-request-method", "POST")
        .body(Body::empty())?;
    let res = send(&app, request).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    Ok(())
}

#[tokio::test]
async fn test_single_permit_is_released_across_routes() -> Result<()> {
    let app = test_app_with(Config {
        max_concurrent_requests: 1,
        ..Config::default()
    })?;
    for uri in ["/health", "/badges", "/badges/status?coins=30", "/health"] {
        let res = get(&app, uri).await?;
        assert_eq!(res.status, StatusCode::OK, "{uri}");
    }
    Ok(())
}
