use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::read_failure;

pub async fn get_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_fee_by_id(fee_id).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee,
            "Fee retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeNotFound,
            "Fee not found",
        ))),
        Err(e) => Ok(read_failure(e, "Fee query")),
    }
}
