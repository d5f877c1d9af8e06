use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode, fees::requests::UpdateFeeRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn update_fee(
    service: &FeeService,
    request: &HttpRequest,
    fee_id: i64,
    data: UpdateFeeRequest,
) -> ActixResult<HttpResponse> {
    if data.is_empty() {
        return Ok(validation_failed("No fields to update"));
    }

    if let Err(msg) = data.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FeeAmountInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.update_fee(fee_id, data).await {
        Ok(Some(fee)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fee,
            "Fee updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FeeNotFound,
            "Fee not found",
        ))),
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::BadRequest, "Fee record already exists"),
            ErrorCode::RecordUpdateFailed,
            "Fee update",
        )),
    }
}
