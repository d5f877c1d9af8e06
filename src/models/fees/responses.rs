use super::entities::Fee;
use crate::models::common::PaginatedResponse;

// 费用列表响应
pub type FeeListResponse = PaginatedResponse<Fee>;
