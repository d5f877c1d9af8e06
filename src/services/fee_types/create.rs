use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeTypeService;
use crate::models::{ApiResponse, ErrorCode, fee_types::requests::FeeTypeRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn create_fee_type(
    service: &FeeTypeService,
    request: &HttpRequest,
    data: FeeTypeRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_fee_type(data).await {
        Ok(fee_type) => {
            info!("Fee type {} created", fee_type.type_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                fee_type,
                "Fee type created successfully",
            )))
        }
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::FeeTypeAlreadyExists, "Fee type already exists"),
            ErrorCode::RecordCreationFailed,
            "Fee type creation",
        )),
    }
}
