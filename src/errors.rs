//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_schoolsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolSysError {
            $($variant(String),)*
        }

        impl SchoolSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_schoolsys_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Conflict("E004", "Unique Constraint Violation"),
    ForeignKey("E005", "Foreign Key Violation"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    MediaPluginNotFound("E010", "Media Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    MediaUpload("E012", "Media Upload Error"),
    MediaConfig("E013", "Media Configuration Error"),
}

impl SchoolSysError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将 SeaORM 错误按约束类型归类
    pub fn from_db(err: sea_orm::DbErr, context: &str) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                SchoolSysError::conflict(format!("{context}: {detail}"))
            }
            Some(sea_orm::SqlErr::ForeignKeyConstraintViolation(detail)) => {
                SchoolSysError::foreign_key(format!("{context}: {detail}"))
            }
            // SQLite 的 ON DELETE RESTRICT 以触发器错误上报，只能按消息识别
            _ if err.to_string().contains("FOREIGN KEY constraint failed") => {
                SchoolSysError::foreign_key(format!("{context}: {err}"))
            }
            _ => SchoolSysError::database_operation(format!("{context}: {err}")),
        }
    }
}

impl fmt::Display for SchoolSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolSysError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolSysError {
    fn from(err: std::io::Error) -> Self {
        SchoolSysError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolSysError {
    fn from(err: serde_json::Error) -> Self {
        SchoolSysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolSysError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolSysError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for SchoolSysError {
    fn from(err: reqwest::Error) -> Self {
        SchoolSysError::MediaUpload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolSysError::database_config("test").code(), "E001");
        assert_eq!(SchoolSysError::conflict("test").code(), "E004");
        assert_eq!(SchoolSysError::validation("test").code(), "E007");
        assert_eq!(SchoolSysError::media_upload("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolSysError::foreign_key("test").error_type(),
            "Foreign Key Violation"
        );
        assert_eq!(
            SchoolSysError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolSysError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolSysError::media_upload("host unreachable");
        let formatted = err.format_simple();
        assert!(formatted.contains("Media Upload Error"));
        assert!(formatted.contains("host unreachable"));
    }

    #[test]
    fn test_from_db_falls_back_to_operation_error() {
        let err = SchoolSysError::from_db(
            sea_orm::DbErr::Custom("connection reset".to_string()),
            "创建学生失败",
        );
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("connection reset"));
    }

    #[test]
    fn test_from_db_recognizes_restrict_trigger_message() {
        let err = SchoolSysError::from_db(
            sea_orm::DbErr::Custom("FOREIGN KEY constraint failed".to_string()),
            "删除班级失败",
        );
        assert!(matches!(err, SchoolSysError::ForeignKey(_)));
    }
}
