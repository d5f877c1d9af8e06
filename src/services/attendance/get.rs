use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::read_failure;

pub async fn get_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_attendance_by_id(attendance_id).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            "Attendance retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance not found",
        ))),
        Err(e) => Ok(read_failure(e, "Attendance query")),
    }
}
