//! 本地磁盘后端
//!
//! 文件写入 `upload.dir/<folder>/`，通过 `/uploads/{folder}/{file_name}` 路由对外提供。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use super::{MediaUploader, UploadRequest, UploadedMedia};
use crate::config::AppConfig;
use crate::declare_media_uploader_plugin;
use crate::errors::{Result, SchoolSysError};

declare_media_uploader_plugin!("local", LocalUploader);

pub struct LocalUploader {
    dir: PathBuf,
    public_base_url: String,
}

impl LocalUploader {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config() -> Result<Self> {
        let config = AppConfig::get();
        if config.upload.dir.trim().is_empty() {
            return Err(SchoolSysError::media_config("upload.dir is empty"));
        }
        Ok(Self::new(&config.upload.dir, &config.media.public_base_url))
    }
}

/// 路径片段只允许字母数字与 `.-_`，且不能是 `.` / `..`
pub fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

#[async_trait]
impl MediaUploader for LocalUploader {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    fn local_root(&self) -> Option<&Path> {
        Some(&self.dir)
    }

    async fn upload(&self, request: UploadRequest) -> Result<UploadedMedia> {
        if !is_safe_segment(&request.folder) {
            return Err(SchoolSysError::media_upload(format!(
                "Invalid upload folder: {}",
                request.folder
            )));
        }

        let folder_path = self.dir.join(&request.folder);
        tokio::fs::create_dir_all(&folder_path).await.map_err(|e| {
            SchoolSysError::media_upload(format!("Failed to create upload directory: {e}"))
        })?;

        let file_name = format!(
            "{}-{}{}",
            chrono::Utc::now().timestamp(),
            Uuid::new_v4().simple(),
            request.extension
        );
        let file_path = folder_path.join(&file_name);

        tokio::fs::write(&file_path, &request.data)
            .await
            .map_err(|e| SchoolSysError::media_upload(format!("Failed to write file: {e}")))?;
        debug!("Stored upload at {}", file_path.display());

        Ok(UploadedMedia {
            url: format!(
                "{}/uploads/{}/{}",
                self.public_base_url, request.folder, file_name
            ),
            public_id: format!("{}/{}", request.folder, file_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_segment() {
        assert!(is_safe_segment("students"));
        assert!(is_safe_segment("1700000000-abc.png"));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment(""));
    }

    #[tokio::test]
    async fn test_upload_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let uploader = LocalUploader::new(tmp.path(), "http://localhost:3000/");

        let media = uploader
            .upload(UploadRequest {
                data: b"GIF89a-data".to_vec(),
                original_name: "a.gif".to_string(),
                extension: ".gif".to_string(),
                content_type: "image/gif".to_string(),
                folder: "pictures".to_string(),
            })
            .await
            .unwrap();

        assert!(
            media
                .url
                .starts_with("http://localhost:3000/uploads/pictures/")
        );
        assert!(media.url.ends_with(".gif"));

        let stored = tmp.path().join(&media.public_id);
        assert_eq!(std::fs::read(stored).unwrap(), b"GIF89a-data");
    }

    #[tokio::test]
    async fn test_upload_rejects_traversal_folder() {
        let tmp = tempfile::tempdir().unwrap();
        let uploader = LocalUploader::new(tmp.path(), "http://localhost");
        let err = uploader
            .upload(UploadRequest {
                data: vec![1],
                original_name: String::new(),
                extension: ".png".to_string(),
                content_type: "image/png".to_string(),
                folder: "..".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, SchoolSysError::MediaUpload(_)));
    }
}
