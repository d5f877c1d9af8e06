use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::path::Path;

use super::FileService;
use crate::errors::SchoolSysError;
use crate::media::local::is_safe_segment;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::common::uploader_from_request;
use crate::utils::file_magic::image_mime_type;

fn file_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::FileNotFound,
        "File not found",
    ))
}

pub async fn serve_upload(
    _service: &FileService,
    request: &HttpRequest,
    folder: String,
    file_name: String,
) -> ActixResult<HttpResponse> {
    if !is_safe_segment(&folder) || !is_safe_segment(&file_name) {
        return Ok(file_not_found());
    }

    // 只有 local 后端才由本服务提供文件
    let Some(root) = uploader_from_request(request)
        .and_then(|uploader| uploader.local_root().map(Path::to_path_buf))
    else {
        return Ok(file_not_found());
    };

    let file_path = root.join(&folder).join(&file_name);
    let buf = match tokio::fs::read(&file_path).await {
        Ok(buf) => buf,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(file_not_found()),
        Err(e) => {
            tracing::error!("{}", SchoolSysError::file_operation(format!("{e}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File read failed",
                )),
            );
        }
    };

    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, image_mime_type(&extension)))
        .insert_header((header::CACHE_CONTROL, "public, max-age=86400"))
        .body(buf))
}
