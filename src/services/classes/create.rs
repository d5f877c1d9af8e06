use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::{validation_failed, write_failure};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = class_data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {}-{} created", class.class_name, class.section);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created successfully")))
        }
        Err(e) => Ok(write_failure(
            e,
            (
                ErrorCode::ClassAlreadyExists,
                "Class with this name and section already exists",
            ),
            ErrorCode::RecordCreationFailed,
            "Class creation",
        )),
    }
}
