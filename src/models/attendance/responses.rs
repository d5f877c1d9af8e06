use super::entities::Attendance;
use crate::models::common::PaginatedResponse;

// 考勤列表响应
pub type AttendanceListResponse = PaginatedResponse<Attendance>;
