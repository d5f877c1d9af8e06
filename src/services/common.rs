//! 各业务服务共用的请求上下文获取与错误响应映射

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use ts_rs::TS;

use crate::errors::{Result, SchoolSysError};
use crate::media::{MediaUploader, UploadRequest};
use crate::models::{ApiResponse, ErrorCode, PaginatedResponse};
use crate::storage::Storage;
use crate::utils::multipart::UploadedFile;

pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn uploader_from_request(request: &HttpRequest) -> Option<Arc<dyn MediaUploader>> {
    request
        .app_data::<web::Data<Arc<dyn MediaUploader>>>()
        .map(|data| data.get_ref().clone())
}

pub(crate) fn validation_failed(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ValidationFailed,
        message,
    ))
}

pub(crate) fn referenced_record_missing() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ReferencedRecordNotFound,
        "Referenced record does not exist",
    ))
}

/// 查询类错误统一为 500
pub(crate) fn read_failure(err: SchoolSysError, action: &str) -> HttpResponse {
    error!("{} failed: {}", action, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{action} failed"),
    ))
}

/// 写入类错误：唯一约束 409，外键 400，其余 500
pub(crate) fn write_failure(
    err: SchoolSysError,
    conflict: (ErrorCode, &str),
    fallback: ErrorCode,
    action: &str,
) -> HttpResponse {
    match err {
        SchoolSysError::Conflict(detail) => {
            warn!("{} conflict: {}", action, detail);
            HttpResponse::Conflict().json(ApiResponse::error_empty(conflict.0, conflict.1))
        }
        SchoolSysError::ForeignKey(detail) => {
            warn!("{} rejected by foreign key: {}", action, detail);
            referenced_record_missing()
        }
        SchoolSysError::Validation(message) => validation_failed(message),
        other => {
            error!("{} failed: {}", action, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                fallback,
                format!("{action} failed"),
            ))
        }
    }
}

/// 删除类错误：仍被引用时 409
pub(crate) fn delete_failure(err: SchoolSysError, action: &str) -> HttpResponse {
    match err {
        SchoolSysError::ForeignKey(detail) => {
            warn!("{} blocked by references: {}", action, detail);
            HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RecordStillReferenced,
                "Record is still referenced by other records",
            ))
        }
        other => {
            error!("{} failed: {}", action, other);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RecordDeleteFailed,
                format!("{action} failed"),
            ))
        }
    }
}

/// 列表响应：查询条件下没有任何记录时返回 404，翻页越界返回空列表
pub(crate) fn list_response<T>(
    result: Result<PaginatedResponse<T>>,
    not_found: (ErrorCode, &str),
    success_message: &str,
    action: &str,
) -> HttpResponse
where
    T: TS + Serialize,
{
    match result {
        Ok(list) if list.is_empty_result() => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found.0, not_found.1))
        }
        Ok(list) => HttpResponse::Ok().json(ApiResponse::success(list, success_message)),
        Err(e) => read_failure(e, action),
    }
}

/// 上传文件到媒体后端并返回公开 URL
pub(crate) async fn upload_to_media_host(
    request: &HttpRequest,
    file: UploadedFile,
    folder: &str,
) -> std::result::Result<String, HttpResponse> {
    let Some(uploader) = uploader_from_request(request) else {
        error!("Media uploader not configured");
        return Err(
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::ServiceUnavailable,
                "Media uploader is not configured",
            )),
        );
    };

    let size = file.data.len();
    match uploader.upload(UploadRequest::from_file(file, folder)).await {
        Ok(media) => {
            info!(
                "Uploaded {} bytes to {} as {}",
                size,
                uploader.backend_name(),
                media.public_id
            );
            Ok(media.url)
        }
        Err(e) => {
            error!("Media upload via {} failed: {}", uploader.backend_name(), e);
            Err(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::MediaUploadFailed,
                format!("Image upload failed: {}", e.message()),
            )))
        }
    }
}

/// 写库失败时已上传的文件保留在媒体后端
pub(crate) fn warn_orphaned_upload(url: Option<&str>) {
    if let Some(url) = url {
        warn!("Database write failed after upload, media left on host: {}", url);
    }
}
