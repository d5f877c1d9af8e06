use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, students::requests::CreateStudentRequest};
use crate::services::common::{
    upload_to_media_host, validation_failed, warn_orphaned_upload, write_failure,
};
use crate::utils::multipart::{UploadLimits, read_multipart_form};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limits = UploadLimits::from_config(&AppConfig::get().upload);

    let form = match read_multipart_form(payload, "profile_pic", &limits).await {
        Ok(form) => form,
        Err(resp) => return Ok(resp),
    };

    // 先校验文本字段，校验失败的请求不会触发上传
    let mut student = match CreateStudentRequest::from_form(&form.fields) {
        Ok(student) => student,
        Err(msg) => return Ok(validation_failed(msg)),
    };

    if let Some(file) = form.file {
        match upload_to_media_host(request, file, "students").await {
            Ok(url) => student.profile_pic = Some(url),
            Err(resp) => return Ok(resp),
        }
    }

    let uploaded = student.profile_pic.clone();
    match storage.create_student(student).await {
        Ok(student) => {
            info!("Student {} ({}) created", student.id, student.roll_no);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                student,
                "Student created successfully",
            )))
        }
        Err(e) => {
            warn_orphaned_upload(uploaded.as_deref());
            Ok(write_failure(
                e,
                (ErrorCode::StudentAlreadyExists, "Student already exists"),
                ErrorCode::RecordCreationFailed,
                "Student creation",
            ))
        }
    }
}
