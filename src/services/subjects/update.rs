use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::UpdateSubjectRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    data: UpdateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if data.is_empty() {
        return Ok(validation_failed("No fields to update"));
    }

    if let Err(msg) = data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_subject(subject_id, data).await {
        Ok(Some(subject)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            subject,
            "Subject updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found",
        ))),
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::BadRequest, "Subject already exists"),
            ErrorCode::RecordUpdateFailed,
            "Subject update",
        )),
    }
}
