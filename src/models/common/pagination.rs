use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "pagination.ts")]
pub struct PaginationQuery {
    #[serde(
        default = "default_page",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub page: i64,
    #[serde(
        default = "default_size",
        deserialize_with = "deserialize_string_to_i64"
    )]
    pub size: i64,
}

impl PaginationQuery {
    // 规范化后的 (页码, 每页数量)，页码上限保证 OFFSET 不溢出
    pub fn normalized(page: Option<i64>, size: Option<i64>) -> (u64, u64) {
        let size = size.unwrap_or(10).clamp(1, 100) as u64;
        let page = (page.unwrap_or(1).max(1) as u64).min(i64::MAX as u64 / size);
        (page, size)
    }
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl<T: TS> PaginatedResponse<T> {
    // 查询条件下完全没有记录
    pub fn is_empty_result(&self) -> bool {
        self.pagination.total == 0
    }
}

// 自定义反序列化函数，支持字符串到i64的转换
fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{Error, Unexpected, Visitor};
    use std::fmt;

    struct I64Visitor;

    impl<'de> Visitor<'de> for I64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: Error,
        {
            if value <= i64::MAX as u64 {
                Ok(value as i64)
            } else {
                Err(Error::invalid_value(Unexpected::Unsigned(value), &self))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: Error,
        {
            value
                .parse()
                .map_err(|_| Error::invalid_value(Unexpected::Str(value), &self))
        }
    }

    deserializer.deserialize_any(I64Visitor)
}

// 可选 ID 过滤参数：查询字符串经 flatten 后均为字符串，空串视为未提供
pub fn deserialize_option_string_to_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Str(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(value)) => Ok(Some(value)),
        Some(RawId::Str(value)) if value.trim().is_empty() => Ok(None),
        Some(RawId::Str(value)) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::custom(format!("invalid integer: '{value}'"))),
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self { page: 1, size: 10 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[derive(Debug, Deserialize)]
    struct FilterParams {
        #[serde(flatten)]
        pagination: PaginationQuery,
        #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
        class_id: Option<i64>,
    }

    #[test]
    fn test_query_string_with_flattened_filters() {
        let params = Query::<FilterParams>::from_query("page=2&size=20&class_id=7")
            .unwrap()
            .into_inner();
        assert_eq!(params.pagination.page, 2);
        assert_eq!(params.pagination.size, 20);
        assert_eq!(params.class_id, Some(7));
    }

    #[test]
    fn test_query_string_defaults() {
        let params = Query::<FilterParams>::from_query("class_id=")
            .unwrap()
            .into_inner();
        assert_eq!(params.pagination.page, 1);
        assert_eq!(params.pagination.size, 10);
        assert_eq!(params.class_id, None);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        assert!(Query::<FilterParams>::from_query("class_id=abc").is_err());
    }

    #[test]
    fn test_normalized_clamps_values() {
        assert_eq!(PaginationQuery::normalized(Some(0), Some(500)), (1, 100));
        assert_eq!(PaginationQuery::normalized(None, None), (1, 10));
    }

    #[test]
    fn test_normalized_caps_huge_page() {
        let (page, size) = PaginationQuery::normalized(Some(i64::MAX), Some(10));
        assert_eq!(page, i64::MAX as u64 / 10);
        assert!(page.checked_mul(size).is_some());
    }
}
