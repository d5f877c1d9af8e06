use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 缴费状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "fee.ts")]
pub enum FeeStatus {
    #[default]
    Pending, // 待缴
    Paid,    // 已缴
    Partial, // 部分缴纳
    Overdue, // 逾期
}

impl FeeStatus {
    pub const PENDING: &'static str = "pending";
    pub const PAID: &'static str = "paid";
    pub const PARTIAL: &'static str = "partial";
    pub const OVERDUE: &'static str = "overdue";
}

impl<'de> Deserialize<'de> for FeeStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid fee status '{s}', expected one of: pending, paid, partial, overdue"
            ))
        })
    }
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeStatus::Pending => write!(f, "{}", FeeStatus::PENDING),
            FeeStatus::Paid => write!(f, "{}", FeeStatus::PAID),
            FeeStatus::Partial => write!(f, "{}", FeeStatus::PARTIAL),
            FeeStatus::Overdue => write!(f, "{}", FeeStatus::OVERDUE),
        }
    }
}

impl std::str::FromStr for FeeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            FeeStatus::PENDING => Ok(FeeStatus::Pending),
            FeeStatus::PAID => Ok(FeeStatus::Paid),
            FeeStatus::PARTIAL => Ok(FeeStatus::Partial),
            FeeStatus::OVERDUE => Ok(FeeStatus::Overdue),
            _ => Err(format!("Invalid fee status: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "fee.ts")]
pub struct Fee {
    pub fee_id: i64,
    pub student_id: i64,
    pub amount: f64,
    pub due_date: chrono::NaiveDate,
    pub status: FeeStatus,
    pub type_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("PAID".parse::<FeeStatus>(), Ok(FeeStatus::Paid));
        assert_eq!("overdue".parse::<FeeStatus>(), Ok(FeeStatus::Overdue));
        assert!("waived".parse::<FeeStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FeeStatus::Partial).unwrap(),
            "\"partial\""
        );
        let status: FeeStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, FeeStatus::Pending);
    }

    #[test]
    fn test_unknown_status_error_is_english() {
        let err = serde_json::from_str::<FeeStatus>("\"bogus\"").unwrap_err();
        assert!(err.to_string().contains("Invalid fee status 'bogus'"));
    }
}
