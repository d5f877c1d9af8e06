mod common;

use actix_web::{http::StatusCode, http::header, test};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use common::{PNG_BYTES, multipart_files};
use rust_schoolsys::config::AppConfig;
use rust_schoolsys::errors::{Result, SchoolSysError};
use rust_schoolsys::media::{MediaUploader, UploadRequest, UploadedMedia};

/// 始终失败的媒体后端
struct UnreachableHost;

#[async_trait]
impl MediaUploader for UnreachableHost {
    fn backend_name(&self) -> &'static str {
        "unreachable"
    }

    async fn upload(&self, _request: UploadRequest) -> Result<UploadedMedia> {
        Err(SchoolSysError::media_upload("connection refused"))
    }
}

fn create_student_request(files: &[(&str, &str, &[u8])]) -> test::TestRequest {
    let (content_type, body) =
        multipart_files(&[("name", "Nadia"), ("roll_no", "R-200")], files);
    test::TestRequest::post()
        .uri("/api/v1/students")
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
}

#[actix_web::test]
async fn test_second_file_part_is_rejected() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = create_student_request(&[
        ("profile_pic", "a.png", &PNG_BYTES[..]),
        ("profile_pic", "b.png", &PNG_BYTES[..]),
    ])
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3004);
}

#[actix_web::test]
async fn test_oversized_file_is_rejected() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let mut data = PNG_BYTES.to_vec();
    data.resize(AppConfig::get().upload.max_size + 1, 0);

    let req = create_student_request(&[("profile_pic", "big.png", &data[..])]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3003);
    assert!(!state.upload_dir.path().join("students").exists());
}

#[actix_web::test]
async fn test_failed_upload_leaves_database_untouched() {
    let mut state = common::setup().await;
    state.uploader = Arc::new(UnreachableHost);
    let app = test::init_service(common::app(&state)).await;

    let req = create_student_request(&[("profile_pic", "avatar.png", &PNG_BYTES[..])])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 3005);

    let req = test::TestRequest::get().uri("/api/v1/students").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
