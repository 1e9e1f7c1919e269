mod common;

use anyhow::Result;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn unmatched_route_is_json_not_found() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.client.get(app.url("/no/such/route")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "Not Found" }));
    Ok(())
}

#[tokio::test]
async fn preflight_is_no_content_with_cors_headers() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .client
        .request(Method::OPTIONS, app.url("/articles"))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let headers = res.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"].to_str()?.to_string();
    for method in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
        assert!(methods.contains(method), "{} missing from {}", method, methods);
    }
    let allowed = headers["access-control-allow-headers"].to_str()?.to_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
    assert!(res.bytes().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn responses_allow_any_origin() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app
        .client
        .get(app.url("/articles"))
        .header("Origin", "http://example.org")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
    Ok(())
}

#[tokio::test]
async fn health_reports_store_status() -> Result<()> {
    let app = common::spawn_app().await?;

    let res = app.client.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"], json!("ok"));
    Ok(())
}
