use super::entities::FeeStatus;
use crate::models::common::{PaginationQuery, deserialize_option_string_to_i64};
use serde::Deserialize;
use ts_rs::TS;

// 费用查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct FeeQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub student_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub type_id: Option<i64>,
    pub status: Option<FeeStatus>,
}

// 创建费用请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct CreateFeeRequest {
    pub student_id: i64,
    pub amount: f64,
    pub due_date: chrono::NaiveDate,
    #[serde(default)]
    pub status: FeeStatus,
    pub type_id: i64,
}

impl CreateFeeRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_amount(self.amount)
    }
}

// 更新费用请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct UpdateFeeRequest {
    pub student_id: Option<i64>,
    pub amount: Option<f64>,
    pub due_date: Option<chrono::NaiveDate>,
    pub status: Option<FeeStatus>,
    pub type_id: Option<i64>,
}

impl UpdateFeeRequest {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none()
            && self.amount.is_none()
            && self.due_date.is_none()
            && self.status.is_none()
            && self.type_id.is_none()
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.amount {
            Some(amount) => validate_amount(amount),
            None => Ok(()),
        }
    }
}

fn validate_amount(amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err("amount must be a non-negative number".to_string());
    }
    Ok(())
}

// 费用列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct FeeListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
    pub type_id: Option<i64>,
    pub status: Option<FeeStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let request: CreateFeeRequest = serde_json::from_str(
            r#"{"student_id":1,"amount":1500.0,"due_date":"2025-01-31","type_id":2}"#,
        )
        .unwrap();
        assert_eq!(request.status, FeeStatus::Pending);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let request = UpdateFeeRequest {
            student_id: None,
            amount: Some(-1.0),
            due_date: None,
            status: None,
            type_id: None,
        };
        assert!(request.validate().is_err());
    }
}
