mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

#[actix_web::test]
async fn test_root_reports_liveness() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Live Here");
}

#[actix_web::test]
async fn test_health_reports_backends() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/system/health")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["database"], "sqlite");
    assert_eq!(body["data"]["media_backend"], "local");
    assert!(body["data"]["uptime_seconds"].as_i64().unwrap() >= 0);
}

#[actix_web::test]
async fn test_unknown_upload_is_not_found() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::get()
        .uri("/uploads/students/missing.png")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // 路径穿越
    let req = test::TestRequest::get()
        .uri("/uploads/..%2F..%2Fetc/passwd")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
