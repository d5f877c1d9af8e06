use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::{ApiResponse, ErrorCode, classes::requests::UpdateClassRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    if update_data.is_empty() {
        return Ok(validation_failed("No fields to update"));
    }

    if let Err(msg) = update_data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class information updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => Ok(write_failure(
            e,
            (
                ErrorCode::ClassAlreadyExists,
                "Class with this name and section already exists",
            ),
            ErrorCode::RecordUpdateFailed,
            "Class update",
        )),
    }
}
