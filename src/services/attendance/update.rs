use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::UpdateAttendanceRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn update_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance_id: i64,
    data: UpdateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    if data.is_empty() {
        return Ok(validation_failed("No fields to update"));
    }

    let storage = service.get_storage(request);

    match storage.update_attendance(attendance_id, data).await {
        Ok(Some(record)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            record,
            "Attendance updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance not found",
        ))),
        Err(e) => Ok(write_failure(
            e,
            (
                ErrorCode::AttendanceAlreadyRecorded,
                "Attendance already recorded for this student on this date",
            ),
            ErrorCode::RecordUpdateFailed,
            "Attendance update",
        )),
    }
}
