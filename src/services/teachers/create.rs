use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode, teachers::requests::TeacherRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    data: TeacherRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_teacher(data).await {
        Ok(teacher) => {
            info!("Teacher {} created", teacher.teacher_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                teacher,
                "Teacher created successfully",
            )))
        }
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::BadRequest, "Teacher already exists"),
            ErrorCode::RecordCreationFailed,
            "Teacher creation",
        )),
    }
}
