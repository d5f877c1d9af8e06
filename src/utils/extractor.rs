//! 路径参数安全提取器
//!
//! 在进入处理函数之前校验路径中的 ID 为正整数，非法值直接返回 400。

use actix_web::{HttpResponse, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 构造路径参数错误
pub fn invalid_path_param(name: &str, raw: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter '{name}': '{raw}' is not a positive integer"),
    ));
    InternalError::from_response(format!("invalid path parameter {name}"), response).into()
}

/// 解析正整数 ID
pub fn parse_positive_i64(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

/// 定义从路径中安全提取 i64 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                std::future::ready(
                    $crate::utils::extractor::parse_positive_i64(raw)
                        .map($name)
                        .ok_or_else(|| $crate::utils::extractor::invalid_path_param($param, raw)),
                )
            }
        }
    };
}

define_safe_i64_extractor!(SafeStudentIdI64, "student_id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeFeeIdI64, "fee_id");
define_safe_i64_extractor!(SafeFeeTypeIdI64, "type_id");
define_safe_i64_extractor!(SafeTeacherIdI64, "teacher_id");
define_safe_i64_extractor!(SafeSubjectIdI64, "subject_id");
define_safe_i64_extractor!(SafeAttendanceIdI64, "attendance_id");
define_safe_i64_extractor!(SafePictureIdI64, "picture_id");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_i64() {
        assert_eq!(parse_positive_i64("42"), Some(42));
        assert_eq!(parse_positive_i64("0"), None);
        assert_eq!(parse_positive_i64("-3"), None);
        assert_eq!(parse_positive_i64("abc"), None);
        assert_eq!(parse_positive_i64(""), None);
    }
}
