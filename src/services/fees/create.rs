use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeService;
use crate::models::{ApiResponse, ErrorCode, fees::requests::CreateFeeRequest};
use crate::services::common::write_failure;

pub async fn create_fee(
    service: &FeeService,
    request: &HttpRequest,
    data: CreateFeeRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = data.validate() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::FeeAmountInvalid, msg)));
    }

    let storage = service.get_storage(request);

    match storage.create_fee(data).await {
        Ok(fee) => {
            info!("Fee {} created", fee.fee_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                fee,
                "Fee created successfully",
            )))
        }
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::BadRequest, "Fee record already exists"),
            ErrorCode::RecordCreationFailed,
            "Fee creation",
        )),
    }
}
