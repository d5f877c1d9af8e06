use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, students::requests::UpdateStudentRequest};
use crate::services::common::{
    read_failure, upload_to_media_host, validation_failed, warn_orphaned_upload, write_failure,
};
use crate::utils::multipart::{UploadLimits, read_multipart_form};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let limits = UploadLimits::from_config(&AppConfig::get().upload);

    let form = match read_multipart_form(payload, "profile_pic", &limits).await {
        Ok(form) => form,
        Err(resp) => return Ok(resp),
    };

    let mut update = match UpdateStudentRequest::from_form(&form.fields) {
        Ok(update) => update,
        Err(msg) => return Ok(validation_failed(msg)),
    };

    if update.is_empty() && form.file.is_none() {
        return Ok(validation_failed("No fields to update"));
    }

    // 学生不存在时不上传
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Ok(read_failure(e, "Student query")),
    }

    if let Some(file) = form.file {
        match upload_to_media_host(request, file, "students").await {
            Ok(url) => update.profile_pic = Some(url),
            Err(resp) => return Ok(resp),
        }
    }

    let uploaded = update.profile_pic.clone();
    match storage.update_student(student_id, update).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                student,
                "Student updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            warn_orphaned_upload(uploaded.as_deref());
            Ok(write_failure(
                e,
                (ErrorCode::StudentAlreadyExists, "Student already exists"),
                ErrorCode::RecordUpdateFailed,
                "Student update",
            ))
        }
    }
}
