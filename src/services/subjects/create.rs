use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::{ApiResponse, ErrorCode, subjects::requests::CreateSubjectRequest};
use crate::services::common::{validation_failed, write_failure};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = data.validate() {
        return Ok(validation_failed(msg));
    }

    let storage = service.get_storage(request);

    match storage.create_subject(data).await {
        Ok(subject) => {
            info!("Subject {} created", subject.subject_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                subject,
                "Subject created successfully",
            )))
        }
        Err(e) => Ok(write_failure(
            e,
            (ErrorCode::BadRequest, "Subject already exists"),
            ErrorCode::RecordCreationFailed,
            "Subject creation",
        )),
    }
}
