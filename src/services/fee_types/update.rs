use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeTypeService;
use crate::models::{ApiResponse, ErrorCode, fee_types::requests::FeeTypeRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn update_fee_type(
    service: &FeeTypeService,
    request: &HttpRequest,
    type_id: i64,
    data: FeeTypeRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.update_fee_type(type_id, data).await {
        Ok(Some(fee_type)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee_type,
            "Fee type updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeTypeNotFound,
            "Fee type not found",
        ))),
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::FeeTypeAlreadyExists, "Fee type already exists"),
            ErrorCode::RecordUpdateFailed,
            "Fee type update",
        )),
    }
}
