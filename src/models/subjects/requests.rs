use crate::models::common::{PaginationQuery, deserialize_option_string_to_i64};
use crate::utils::validate::require_text;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct SubjectQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct CreateSubjectRequest {
    pub subject_name: String,
    pub teacher_id: Option<i64>,
    pub description: Option<String>,
}

impl CreateSubjectRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_text("subject_name", &self.subject_name)
    }
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "subject.ts")]
pub struct UpdateSubjectRequest {
    pub subject_name: Option<String>,
    pub teacher_id: Option<i64>,
    pub description: Option<String>,
}

impl UpdateSubjectRequest {
    pub fn is_empty(&self) -> bool {
        self.subject_name.is_none() && self.teacher_id.is_none() && self.description.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref subject_name) = self.subject_name {
            require_text("subject_name", subject_name)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}
