use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::FileService;

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn serve_upload(
    request: HttpRequest,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (folder, file_name) = path.into_inner();
    FILE_SERVICE
        .serve_upload(&request, folder, file_name)
        .await
}

// 配置路由
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/uploads/{folder}/{file_name}", web::get().to(serve_upload));
}
