mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use rust_schoolsys::models::students::requests::CreateStudentRequest;

#[actix_web::test]
async fn test_class_crud_flow() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    // 空表时列表返回 404
    let req = test::TestRequest::get().uri("/api/v1/classes").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "class_name": "Grade 5", "section": "A" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let class_id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["class_name"], "Grade 5");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/classes/{class_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["section"], "A");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/classes/{class_id}"))
        .set_json(json!({ "section": "B" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["section"], "B");
    assert_eq!(body["data"]["class_name"], "Grade 5");

    let req = test::TestRequest::get()
        .uri("/api/v1/classes?page=1&size=5")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["pagination"]["total"], 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/classes/{class_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/classes/{class_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_class_rejects_duplicates_and_blank_fields() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/v1/classes")
            .set_json(json!({ "class_name": "Grade 6", "section": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "class_name": "   ", "section": "A" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_invalid_path_id_is_rejected() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    for uri in ["/api/v1/classes/abc", "/api/v1/students/-1", "/api/v1/fees/0"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn test_referenced_class_cannot_be_deleted() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "class_name": "Grade 7", "section": "C" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let class_id = body["data"]["id"].as_i64().unwrap();

    state
        .storage
        .create_student(CreateStudentRequest {
            name: "Ayesha".to_string(),
            roll_no: "R-001".to_string(),
            class_id: Some(class_id),
            ..Default::default()
        })
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/classes/{class_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_fee_flow_and_foreign_keys() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let student = state
        .storage
        .create_student(CreateStudentRequest {
            name: "Bilal".to_string(),
            roll_no: "R-002".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/fee-types")
        .set_json(json!({ "type_name": "Tuition" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let type_id = body["data"]["type_id"].as_i64().unwrap();

    // 不存在的学生
    let req = test::TestRequest::post()
        .uri("/api/v1/fees")
        .set_json(json!({
            "student_id": student.id + 100,
            "amount": 1500.0,
            "due_date": "2025-03-01",
            "type_id": type_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 金额非法
    let req = test::TestRequest::post()
        .uri("/api/v1/fees")
        .set_json(json!({
            "student_id": student.id,
            "amount": -5.0,
            "due_date": "2025-03-01",
            "type_id": type_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/v1/fees")
        .set_json(json!({
            "student_id": student.id,
            "amount": 1500.0,
            "due_date": "2025-03-01",
            "type_id": type_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let fee_id = body["data"]["fee_id"].as_i64().unwrap();
    assert_eq!(body["data"]["status"], "pending");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/fees/{fee_id}"))
        .set_json(json!({ "status": "paid" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "paid");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/fees?student_id={}", student.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pagination"]["total"], 1);

    // 费用类型仍被引用
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/fee-types/{type_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_teacher_and_subject_flow() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/teachers")
        .set_json(json!({ "name": "Mr. Khan" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let teacher_id = body["data"]["teacher_id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/subjects")
        .set_json(json!({
            "subject_name": "Mathematics",
            "teacher_id": teacher_id,
            "description": "Algebra and geometry",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let subject_id = body["data"]["subject_id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/subjects")
        .set_json(json!({ "subject_name": "Physics", "teacher_id": teacher_id + 50 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 删除教师后科目保留，teacher_id 置空
    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/teachers/{teacher_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/subjects/{subject_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"]["teacher_id"].is_null());
}

#[actix_web::test]
async fn test_attendance_is_unique_per_student_and_day() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "class_name": "Grade 8", "section": "A" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let class_id = body["data"]["id"].as_i64().unwrap();

    let student = state
        .storage
        .create_student(CreateStudentRequest {
            name: "Sana".to_string(),
            roll_no: "R-003".to_string(),
            class_id: Some(class_id),
            ..Default::default()
        })
        .await
        .unwrap();

    let record = json!({
        "student_id": student.id,
        "class_id": class_id,
        "date": "2025-02-10",
        "status": "present",
    });

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/v1/attendance")
            .set_json(&record)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/attendance")
        .set_json(json!({
            "student_id": student.id,
            "class_id": class_id,
            "date": "2025-02-11",
            "status": "on_vacation",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/attendance?class_id={class_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["items"][0]["status"], "present");
}

#[actix_web::test]
async fn test_huge_page_returns_empty_items() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "class_name": "Grade 7", "section": "C" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/v1/classes?page=9223372036854775807")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["items"], json!([]));
    assert_eq!(body["data"]["pagination"]["total"], 1);
}

#[actix_web::test]
async fn test_empty_json_update_is_rejected() {
    let state = common::setup().await;
    let app = test::init_service(common::app(&state)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/classes")
        .set_json(json!({ "class_name": "Grade 8", "section": "D" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"]["id"].as_i64().expect("class id");

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/classes/{id}"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1001);
    assert_eq!(body["message"], "No fields to update");
}
