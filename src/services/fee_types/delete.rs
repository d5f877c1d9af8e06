use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeTypeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::delete_failure;

pub async fn delete_fee_type(
    service: &FeeTypeService,
    request: &HttpRequest,
    type_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_fee_type(type_id).await {
        Ok(true) => {
            info!("Fee type {} deleted", type_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Fee type deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeTypeNotFound,
            "Fee type not found",
        ))),
        Err(e) => Ok(delete_failure(e, "Fee type deletion")),
    }
}
