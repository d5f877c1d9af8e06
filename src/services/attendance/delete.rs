use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::delete_failure;

pub async fn delete_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_attendance(attendance_id).await {
        Ok(true) => {
            info!("Attendance {} deleted", attendance_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Attendance deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance not found",
        ))),
        Err(e) => Ok(delete_failure(e, "Attendance deletion")),
    }
}
