use super::entities::AttendanceStatus;
use crate::models::common::{PaginationQuery, deserialize_option_string_to_i64};
use serde::Deserialize;
use ts_rs::TS;

// 考勤查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct AttendanceQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub class_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

// 登记考勤请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct CreateAttendanceRequest {
    pub student_id: i64,
    pub class_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
}

// 更新考勤请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "attendance.ts")]
pub struct UpdateAttendanceRequest {
    pub class_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub remarks: Option<String>,
}

impl UpdateAttendanceRequest {
    pub fn is_empty(&self) -> bool {
        self.class_id.is_none()
            && self.date.is_none()
            && self.status.is_none()
            && self.remarks.is_none()
    }
}

// 考勤列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct AttendanceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub class_id: Option<i64>,
    pub date: Option<chrono::NaiveDate>,
    pub status: Option<AttendanceStatus>,
}
