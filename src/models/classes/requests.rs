use crate::models::common::PaginationQuery;
use crate::utils::validate::require_text;
use serde::Deserialize;
use ts_rs::TS;

// 班级查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub section: Option<String>,
    pub search: Option<String>,
}

// 创建班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct CreateClassRequest {
    pub class_name: String,
    pub section: String,
}

impl CreateClassRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_text("class_name", &self.class_name)?;
        require_text("section", &self.section)
    }
}

// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "class.ts")]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub section: Option<String>,
}

impl UpdateClassRequest {
    pub fn is_empty(&self) -> bool {
        self.class_name.is_none() && self.section.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref class_name) = self.class_name {
            require_text("class_name", class_name)?;
        }
        if let Some(ref section) = self.section {
            require_text("section", section)?;
        }
        Ok(())
    }
}

// 班级列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub section: Option<String>,
    pub search: Option<String>,
}
