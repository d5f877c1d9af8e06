use crate::models::common::PaginationQuery;
use crate::utils::validate::require_text;
use serde::Deserialize;
use ts_rs::TS;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建/更新教师请求（仅有一个必填字段，两者共用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherRequest {
    pub name: String,
}

impl TeacherRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name)
    }
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
