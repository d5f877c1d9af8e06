pub mod error_code;
pub mod pagination;
pub mod response;

pub use error_code::ErrorCode;
pub use pagination::{
    PaginatedResponse, PaginationInfo, PaginationQuery, deserialize_option_string_to_i64,
};
pub use response::ApiResponse;
