use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PictureService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::read_failure;

pub async fn get_picture(
    service: &PictureService,
    request: &HttpRequest,
    picture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_picture_by_id(picture_id).await {
        Ok(Some(picture)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            picture,
            "Picture retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PictureNotFound,
            "Picture not found",
        ))),
        Err(e) => Ok(read_failure(e, "Picture query")),
    }
}
