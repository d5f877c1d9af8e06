use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ErrorCode,
    attendance::requests::{AttendanceListQuery, AttendanceQueryParams},
};
use crate::services::common::list_response;

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    query: AttendanceQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = AttendanceListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        student_id: query.student_id,
        class_id: query.class_id,
        date: query.date,
        status: query.status,
    };

    Ok(list_response(
        storage.list_attendance_with_pagination(list_query).await,
        (ErrorCode::AttendanceNotFound, "No attendance records found"),
        "Attendance records retrieved successfully",
        "Attendance query",
    ))
}
