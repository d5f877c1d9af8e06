use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeTypeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::read_failure;

pub async fn get_fee_type(
    service: &FeeTypeService,
    request: &HttpRequest,
    type_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_fee_type_by_id(type_id).await {
        Ok(Some(fee_type)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee_type,
            "Fee type retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeTypeNotFound,
            "Fee type not found",
        ))),
        Err(e) => Ok(read_failure(e, "Fee type query")),
    }
}
