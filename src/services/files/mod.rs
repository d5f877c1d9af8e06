pub mod download;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct FileService;

impl FileService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 读取 local 媒体后端写入的文件
    pub async fn serve_upload(
        &self,
        request: &HttpRequest,
        folder: String,
        file_name: String,
    ) -> ActixResult<HttpResponse> {
        download::serve_upload(self, request, folder, file_name).await
    }
}
