//! Black-box tests for the health, welcome, and fallback endpoints.

use reqwest::StatusCode;

mod common;
use common::TestService;

#[tokio::test]
async fn health_body_is_exactly_the_contract() {
    let svc = TestService::spawn().await;

    let res = reqwest::get(svc.url("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[reqwest::header::CONTENT_TYPE],
        "application/json"
    );
    assert_eq!(res.text().await.unwrap(), r#"{"status":"healthy"}"#);

    svc.stop();
}

#[tokio::test]
async fn root_serves_the_welcome_banner() {
    let svc = TestService::spawn().await;

    let res = reqwest::get(svc.url("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert!(body.starts_with("Welcome to the Advanced Arithmetic Operations API."));
    assert!(body.contains("/squareroot"));

    svc.stop();
}

#[tokio::test]
async fn unmatched_paths_get_404() {
    let svc = TestService::spawn().await;

    let res = reqwest::get(svc.url("/factorial?num=5")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Cannot GET /factorial");

    svc.stop();
}
