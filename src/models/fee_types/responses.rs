use super::entities::FeeType;
use crate::models::common::PaginatedResponse;

pub type FeeTypeListResponse = PaginatedResponse<FeeType>;
