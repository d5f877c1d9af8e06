pub mod attendance;
pub mod classes;
pub mod common;
pub mod fee_types;
pub mod fees;
pub mod pictures;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
