//! 媒体上传适配器
//!
//! 上传适配器接收内存中的文件内容，返回可公开访问的 URL。
//! 各后端通过 [`declare_media_uploader_plugin!`] 在进程启动时注册到 [`register`] 中，
//! 启动阶段按配置名称构建实例。

pub mod cloudinary;
pub mod local;
pub mod register;

use async_trait::async_trait;

use crate::errors::Result;
use crate::utils::multipart::UploadedFile;

/// 上传请求
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Vec<u8>,
    pub original_name: String,
    pub extension: String,
    pub content_type: String,
    /// 业务子目录，如 `students`、`pictures`
    pub folder: String,
}

impl UploadRequest {
    pub fn from_file(file: UploadedFile, folder: &str) -> Self {
        Self {
            data: file.data,
            original_name: file.original_name,
            extension: file.extension,
            content_type: file.content_type,
            folder: folder.to_string(),
        }
    }
}

/// 上传结果
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub url: String,
    pub public_id: String,
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// 后端名称
    fn backend_name(&self) -> &'static str;

    /// 上传文件并返回公开 URL
    async fn upload(&self, request: UploadRequest) -> Result<UploadedMedia>;

    /// 由本服务直接提供文件时的根目录
    fn local_root(&self) -> Option<&std::path::Path> {
        None
    }
}

/// 声明并在进程启动时注册媒体上传后端
///
/// 类型需提供 `fn from_config() -> Result<Self>`。
#[macro_export]
macro_rules! declare_media_uploader_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_media_uploader_plugin() {
            $crate::media::register::register_media_uploader_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        <$ty>::from_config().map(|uploader| {
                            Box::new(uploader) as Box<dyn $crate::media::MediaUploader>
                        })
                    })
                }),
            );
        }
    };
}
