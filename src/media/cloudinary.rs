//! Cloudinary 签名上传
//!
//! 参数按名称排序后以 `k=v` 用 `&` 连接，末尾拼接 api_secret 后取 SHA-256 十六进制摘要作为签名。
//! `file`、`api_key` 与 `signature_algorithm` 不参与签名。

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{MediaUploader, UploadRequest, UploadedMedia};
use crate::config::{AppConfig, CloudinaryConfig};
use crate::declare_media_uploader_plugin;
use crate::errors::{Result, SchoolSysError};

declare_media_uploader_plugin!("cloudinary", CloudinaryUploader);

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorBody {
    error: CloudinaryErrorMessage,
}

#[derive(Debug, Deserialize)]
struct CloudinaryErrorMessage {
    message: String,
}

pub struct CloudinaryUploader {
    client: reqwest::Client,
    api_base: String,
    cloud_name: String,
    api_key: String,
    api_secret: String,
    folder: String,
}

impl CloudinaryUploader {
    pub fn new(config: &CloudinaryConfig, timeout: Duration) -> Result<Self> {
        let missing: Vec<&str> = [
            ("cloud_name", &config.cloud_name),
            ("api_key", &config.api_key),
            ("api_secret", &config.api_secret),
        ]
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| *k)
        .collect();

        if !missing.is_empty() {
            return Err(SchoolSysError::media_config(format!(
                "Cloudinary credentials missing: {}",
                missing.join(", ")
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SchoolSysError::media_config(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            folder: config.folder.trim_matches('/').to_string(),
        })
    }

    pub fn from_config() -> Result<Self> {
        let config = AppConfig::get();
        Self::new(
            &config.media.cloudinary,
            Duration::from_secs(config.media.timeout),
        )
    }

    fn upload_url(&self) -> String {
        format!("{}/v1_1/{}/image/upload", self.api_base, self.cloud_name)
    }

    fn target_folder(&self, sub: &str) -> String {
        match (self.folder.is_empty(), sub.is_empty()) {
            (true, _) => sub.to_string(),
            (false, true) => self.folder.clone(),
            (false, false) => format!("{}/{}", self.folder, sub),
        }
    }
}

/// 计算 Cloudinary 请求签名
pub fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    fn backend_name(&self) -> &'static str {
        "cloudinary"
    }

    async fn upload(&self, request: UploadRequest) -> Result<UploadedMedia> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let public_id = Uuid::new_v4().simple().to_string();
        let folder = self.target_folder(&request.folder);

        let params = [
            ("folder", folder.clone()),
            ("public_id", public_id.clone()),
            ("timestamp", timestamp.clone()),
        ];
        let signature = sign_params(&params, &self.api_secret);

        let file_name = if request.original_name.is_empty() {
            format!("{public_id}{}", request.extension)
        } else {
            request.original_name.clone()
        };
        let part = Part::bytes(request.data)
            .file_name(file_name)
            .mime_str(&request.content_type)?;

        let mut form = Form::new()
            .part("file", part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("public_id", public_id)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        if !folder.is_empty() {
            form = form.text("folder", folder);
        }

        debug!("Uploading media to Cloudinary cloud '{}'", self.cloud_name);
        let response = self
            .client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<CloudinaryErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            warn!("Cloudinary upload rejected ({}): {}", status, message);
            return Err(SchoolSysError::media_upload(format!(
                "Cloudinary rejected upload: {message}"
            )));
        }

        let body: CloudinaryUploadResponse = response.json().await?;
        Ok(UploadedMedia {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_base: &str) -> CloudinaryConfig {
        CloudinaryConfig {
            api_base: api_base.to_string(),
            cloud_name: "demo".to_string(),
            api_key: "123456".to_string(),
            api_secret: "abcd".to_string(),
            folder: "school".to_string(),
        }
    }

    fn png_request() -> UploadRequest {
        UploadRequest {
            data: vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
            original_name: "avatar.png".to_string(),
            extension: ".png".to_string(),
            content_type: "image/png".to_string(),
            folder: "students".to_string(),
        }
    }

    #[test]
    fn test_sign_params_sorts_and_skips_empty() {
        let params = [
            ("timestamp", "1315060510".to_string()),
            ("public_id", "sample".to_string()),
            ("folder", String::new()),
        ];
        let mut hasher = Sha256::new();
        hasher.update(b"public_id=sample&timestamp=1315060510abcd");
        let expected = hex::encode(hasher.finalize());

        assert_eq!(sign_params(&params, "abcd"), expected);
        assert_eq!(sign_params(&params, "abcd").len(), 64);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let mut config = test_config("https://api.cloudinary.com");
        config.api_secret.clear();
        let err = CloudinaryUploader::new(&config, Duration::from_secs(5))
            .err()
            .expect("should reject");
        assert!(err.to_string().contains("api_secret"));
    }

    #[test]
    fn test_target_folder() {
        let uploader =
            CloudinaryUploader::new(&test_config("http://localhost"), Duration::from_secs(5))
                .unwrap();
        assert_eq!(uploader.target_folder("students"), "school/students");
        assert_eq!(uploader.target_folder(""), "school");
        assert_eq!(
            uploader.upload_url(),
            "http://localhost/v1_1/demo/image/upload"
        );
    }

    #[tokio::test]
    async fn test_upload_returns_secure_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1_1/demo/image/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "secure_url": "https://res.cloudinary.com/demo/image/upload/school/students/x.png",
                "public_id": "school/students/x",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uploader =
            CloudinaryUploader::new(&test_config(&server.uri()), Duration::from_secs(5)).unwrap();
        let media = uploader.upload(png_request()).await.unwrap();

        assert_eq!(
            media.url,
            "https://res.cloudinary.com/demo/image/upload/school/students/x.png"
        );
        assert_eq!(media.public_id, "school/students/x");
    }

    #[tokio::test]
    async fn test_upload_rejection_maps_to_media_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "message": "Invalid Signature" }
            })))
            .mount(&server)
            .await;

        let uploader =
            CloudinaryUploader::new(&test_config(&server.uri()), Duration::from_secs(5)).unwrap();
        let err = uploader.upload(png_request()).await.unwrap_err();

        assert!(matches!(err, SchoolSysError::MediaUpload(_)));
        assert!(err.to_string().contains("Invalid Signature"));
    }
}
