use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PictureService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, pictures::requests::CreatePictureRequest};
use crate::services::common::{
    read_failure, referenced_record_missing, upload_to_media_host, validation_failed,
    warn_orphaned_upload, write_failure,
};
use crate::utils::multipart::{UploadLimits, read_multipart_form};

pub async fn create_picture(
    service: &PictureService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limits = UploadLimits::from_config(&AppConfig::get().upload);

    let form = match read_multipart_form(payload, "image", &limits).await {
        Ok(form) => form,
        Err(resp) => return Ok(resp),
    };

    let mut picture = match CreatePictureRequest::from_form(&form.fields) {
        Ok(picture) => picture,
        Err(msg) => return Ok(validation_failed(msg)),
    };

    let Some(file) = form.file else {
        return Ok(validation_failed("Missing required fields: image"));
    };

    // 学生不存在时不上传
    match storage.get_student_by_id(picture.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(referenced_record_missing()),
        Err(e) => return Ok(read_failure(e, "Student query")),
    }

    picture.image_url = match upload_to_media_host(request, file, "pictures").await {
        Ok(url) => url,
        Err(resp) => return Ok(resp),
    };

    let uploaded = picture.image_url.clone();
    match storage.create_picture(picture).await {
        Ok(picture) => {
            info!("Picture {} stored for student {}", picture.id, picture.student_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                picture,
                "Picture uploaded successfully",
            )))
        }
        Err(e) => {
            warn_orphaned_upload(Some(&uploaded));
            Ok(write_failure(
                e,
                (ErrorCode::BadRequest, "Picture already exists"),
                ErrorCode::RecordCreationFailed,
                "Picture creation",
            ))
        }
    }
}
