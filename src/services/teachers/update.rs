use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::TeacherRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    data: TeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_teacher(teacher_id, data).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            teacher,
            "Teacher updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::BadRequest, "Teacher already exists"),
            ErrorCode::RecordUpdateFailed,
            "Teacher update",
        )),
    }
}
