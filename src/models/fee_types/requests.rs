use crate::models::common::PaginationQuery;
use crate::utils::validate::require_text;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "fee_type.ts")]
pub struct FeeTypeQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "fee_type.ts")]
pub struct FeeTypeRequest {
    pub type_name: String,
}

impl FeeTypeRequest {
    pub fn validate(&self) -> Result<(), String> {
        require_text("type_name", &self.type_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeeTypeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
