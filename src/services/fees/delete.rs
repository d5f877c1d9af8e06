use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::delete_failure;

pub async fn delete_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_fee(fee_id).await {
        Ok(true) => {
            info!("Fee {} deleted", fee_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Fee deleted successfully",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeNotFound,
            "Fee not found",
        ))),
        Err(e) => Ok(delete_failure(e, "Fee deletion")),
    }
}
