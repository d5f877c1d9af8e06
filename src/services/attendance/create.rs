use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::CreateAttendanceRequest};
use crate::services::common::write_failure;

pub async fn create_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    data: CreateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_attendance(data).await {
        Ok(record) => {
            info!("Attendance {} created", record.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                record,
                "Attendance created successfully",
            )))
        }
        Err(e) => Ok(write_failure(
            e,
            (
                ErrorCode::AttendanceAlreadyRecorded,
                "Attendance already recorded for this student on this date",
            ),
            ErrorCode::RecordCreationFailed,
            "Attendance creation",
        )),
    }
}
