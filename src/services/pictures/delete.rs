use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PictureService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::delete_failure;

// 只删除数据库记录，媒体后端上的文件保留
pub async fn delete_picture(
    service: &PictureService,
    request: &HttpRequest,
    picture_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_picture(picture_id).await {
        Ok(true) => {
            info!("Picture {} deleted", picture_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Picture deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PictureNotFound,
            "Picture not found",
        ))),
        Err(e) => Ok(delete_failure(e, "Picture deletion")),
    }
}
