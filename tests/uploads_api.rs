//! 上传相关接口共享同一限流窗口，本文件内的上传请求数需保持在限额以内
mod common;

use actix_web::{http::StatusCode, http::header, test};
use serde_json::Value;

use common::{PNG_BYTES, PUBLIC_BASE, multipart_body};

fn multipart_request(
    method: test::TestRequest,
    uri: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> test::TestRequest {
    let (content_type, body) = multipart_body(fields, file);
    method
        .uri(uri)
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(body)
}

#[actix_web::test]
async fn test_student_with_profile_picture() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = multipart_request(
        test::TestRequest::post(),
        "/api/v1/students",
        &[("name", "Hamza"), ("roll_no", "R-100"), ("phone", "03001234567")],
        Some(("profile_pic", "avatar.png", &PNG_BYTES[..])),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let student_id = body["data"]["id"].as_i64().unwrap();
    let url = body["data"]["profile_pic"].as_str().unwrap().to_string();
    assert!(url.starts_with(&format!("{PUBLIC_BASE}/uploads/students/")));

    // 由本服务读取刚写入的文件
    let path = url.trim_start_matches(PUBLIC_BASE);
    let req = test::TestRequest::get().uri(path).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/png"
    );
    let served = test::read_body(resp).await;
    assert_eq!(&served[..], &PNG_BYTES[..]);

    // 只改文本字段，头像保持不变
    let req = multipart_request(
        test::TestRequest::put(),
        &format!("/api/v1/students/{student_id}"),
        &[("name", "Hamza Ali")],
        None,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Hamza Ali");
    assert_eq!(body["data"]["profile_pic"], url.as_str());

    let req = multipart_request(
        test::TestRequest::put(),
        &format!("/api/v1/students/{student_id}"),
        &[],
        None,
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_student_form_is_validated_before_upload() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = multipart_request(
        test::TestRequest::post(),
        "/api/v1/students",
        &[("father_name", "Imran")],
        Some(("profile_pic", "avatar.png", &PNG_BYTES[..])),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Missing required fields: name, roll_no");

    // 校验失败时不写入任何文件
    assert!(!state.upload_dir.path().join("students").exists());

    // 扩展名与内容不符
    let req = multipart_request(
        test::TestRequest::post(),
        "/api/v1/students",
        &[("name", "Zara"), ("roll_no", "R-101")],
        Some(("profile_pic", "avatar.jpg", &PNG_BYTES[..])),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_picture_upload_requires_existing_student() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = multipart_request(
        test::TestRequest::post(),
        "/api/v1/pictures",
        &[("student_id", "42")],
        Some(("image", "photo.png", &PNG_BYTES[..])),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!state.upload_dir.path().join("pictures").exists());

    let req = multipart_request(
        test::TestRequest::post(),
        "/api/v1/students",
        &[("name", "Usman"), ("roll_no", "R-102")],
        None,
    )
    .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let student_id = body["data"]["id"].as_i64().unwrap();
    assert!(body["data"]["profile_pic"].is_null());

    let student_id_field = student_id.to_string();
    let req = multipart_request(
        test::TestRequest::post(),
        "/api/v1/pictures",
        &[("student_id", student_id_field.as_str())],
        Some(("image", "photo.png", &PNG_BYTES[..])),
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let picture_id = body["data"]["id"].as_i64().unwrap();
    assert!(
        body["data"]["image_url"]
            .as_str()
            .unwrap()
            .contains("/uploads/pictures/")
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/pictures?student_id={student_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/pictures/{picture_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
