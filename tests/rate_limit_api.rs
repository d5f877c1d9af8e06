//! 上传端点限流：10 次/分钟/IP
mod common;

use actix_web::{http::StatusCode, http::header, test};
use serde_json::Value;

use common::multipart_body;

#[actix_web::test]
async fn test_upload_endpoints_are_rate_limited() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    // 最多跨越一次窗口边界，21 次请求必然触发限流
    let mut limited = None;
    for _ in 0..21 {
        let (content_type, body) = multipart_body(&[], None);
        let req = test::TestRequest::post()
            .uri("/api/v1/students")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        if resp.status() == StatusCode::TOO_MANY_REQUESTS {
            limited = Some(resp);
            break;
        }
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let resp = limited.expect("rate limit never triggered");
    assert!(resp.headers().contains_key("retry-after"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1029);
}
