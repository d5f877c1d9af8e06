//! multipart 表单读取
//!
//! 将文本字段收集到 [`FormFields`]，并把指定名称的文件字段缓冲到内存中，
//! 供上传适配器使用。

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures_util::TryStreamExt;
use std::collections::HashMap;
use std::path::Path;

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::file_magic::image_mime_type;
use crate::utils::validate_magic_bytes;

/// 单个文本字段的最大字节数
const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

/// multipart 文本字段集合
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// 获取去除空白后的非空文本
    pub fn text(&self, name: &str) -> Option<String> {
        self.0
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 校验必填字段，一次性报告所有缺失项
    pub fn require(&self, names: &[&str]) -> Result<(), String> {
        let missing: Vec<&str> = names
            .iter()
            .copied()
            .filter(|name| self.text(name).is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Missing required fields: {}", missing.join(", ")))
        }
    }

    pub fn i64(&self, name: &str) -> Result<Option<i64>, String> {
        self.text(name)
            .map(|v| {
                v.parse::<i64>()
                    .map_err(|_| format!("Field '{name}' must be an integer"))
            })
            .transpose()
    }

    pub fn date(&self, name: &str) -> Result<Option<chrono::NaiveDate>, String> {
        self.text(name)
            .map(|v| {
                chrono::NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                    .map_err(|_| format!("Field '{name}' must be a date in YYYY-MM-DD format"))
            })
            .transpose()
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 缓冲在内存中的上传文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub original_name: String,
    pub extension: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// 解析后的 multipart 表单
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: FormFields,
    pub file: Option<UploadedFile>,
}

/// 上传限制
#[derive(Debug, Clone)]
pub struct UploadLimits {
    pub max_size: usize,
    pub allowed_types: Vec<String>,
}

impl UploadLimits {
    pub fn from_config(config: &crate::config::UploadConfig) -> Self {
        Self {
            max_size: config.max_size,
            allowed_types: config.allowed_types.clone(),
        }
    }

    fn allows(&self, extension: &str) -> bool {
        self.allowed_types
            .iter()
            .any(|t| t.to_lowercase() == extension)
    }
}

fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

/// 读取 multipart 表单
///
/// `file_field` 指定文件字段名；其余字段按文本处理。出错时返回可直接响应的 `HttpResponse`。
pub async fn read_multipart_form(
    mut payload: Multipart,
    file_field: &str,
    limits: &UploadLimits,
) -> Result<MultipartForm, HttpResponse> {
    let mut form = MultipartForm::default();

    loop {
        let mut field = match payload.try_next().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return Err(bad_request(
                    ErrorCode::BadRequest,
                    format!("Invalid multipart payload: {e}"),
                ));
            }
        };

        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let file_name = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string());

        if name == file_field {
            let original_name = file_name.unwrap_or_default();
            let content_type = field
                .content_type()
                .map(|ct| ct.to_string())
                .unwrap_or_default();

            let mut data = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(|e| {
                bad_request(
                    ErrorCode::FileUploadFailed,
                    format!("Failed to read uploaded file: {e}"),
                )
            })? {
                // 校验大小
                if data.len() + chunk.len() > limits.max_size {
                    return Err(bad_request(
                        ErrorCode::FileSizeExceeded,
                        "File size exceeds the limit",
                    ));
                }
                data.extend_from_slice(&chunk);
            }

            // 浏览器提交空的文件输入框时视为未上传
            if original_name.is_empty() && data.is_empty() {
                continue;
            }

            if form.file.is_some() {
                return Err(bad_request(
                    ErrorCode::MultifileUploadNotAllowed,
                    "Only one file can be uploaded at a time",
                ));
            }

            // 提取扩展名并校验
            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            if !limits.allows(&extension) {
                return Err(bad_request(
                    ErrorCode::FileTypeNotAllowed,
                    "File type not allowed",
                ));
            }

            if !validate_magic_bytes(&data, &extension) {
                return Err(bad_request(
                    ErrorCode::FileTypeNotAllowed,
                    "File content does not match its extension",
                ));
            }

            let content_type = if content_type.is_empty() {
                image_mime_type(&extension).to_string()
            } else {
                content_type
            };

            form.file = Some(UploadedFile {
                original_name,
                extension,
                content_type,
                data,
            });
        } else if file_name.is_some() {
            return Err(bad_request(
                ErrorCode::BadRequest,
                format!("Unexpected file field '{name}', expected '{file_field}'"),
            ));
        } else {
            let mut value = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(|e| {
                bad_request(ErrorCode::BadRequest, format!("Failed to read field: {e}"))
            })? {
                if value.len() + chunk.len() > MAX_TEXT_FIELD_SIZE {
                    return Err(bad_request(
                        ErrorCode::BadRequest,
                        format!("Field '{name}' is too large"),
                    ));
                }
                value.extend_from_slice(&chunk);
            }

            let value = String::from_utf8(value).map_err(|_| {
                bad_request(
                    ErrorCode::BadRequest,
                    format!("Field '{name}' is not valid UTF-8"),
                )
            })?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_text_trims_and_drops_blank() {
        let form = fields(&[("name", "  Ali "), ("phone", "   ")]);
        assert_eq!(form.text("name").as_deref(), Some("Ali"));
        assert_eq!(form.text("phone"), None);
        assert_eq!(form.text("missing"), None);
    }

    #[test]
    fn test_require_lists_missing_in_order() {
        let form = fields(&[("roll_no", "7")]);
        assert_eq!(
            form.require(&["name", "roll_no", "class_id"]),
            Err("Missing required fields: name, class_id".to_string())
        );
        assert!(form.require(&["roll_no"]).is_ok());
    }

    #[test]
    fn test_typed_accessors() {
        let form = fields(&[
            ("class_id", "12"),
            ("fee_id", "x"),
            ("admission_date", "2024-02-30"),
        ]);
        assert_eq!(form.i64("class_id"), Ok(Some(12)));
        assert!(form.i64("fee_id").is_err());
        assert_eq!(form.i64("missing"), Ok(None));
        assert!(form.date("admission_date").is_err());
    }

    #[test]
    fn test_upload_limits_match_case_insensitively() {
        let limits = UploadLimits {
            max_size: 10,
            allowed_types: vec![".PNG".to_string(), ".jpg".to_string()],
        };
        assert!(limits.allows(".png"));
        assert!(limits.allows(".jpg"));
        assert!(!limits.allows(".gif"));
    }
}
