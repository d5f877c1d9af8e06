use crate::models::common::{PaginationQuery, deserialize_option_string_to_i64};
use crate::utils::multipart::FormFields;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "picture.ts")]
pub struct PictureQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub student_id: Option<i64>,
}

// 新增图片请求，image_url 在上传完成后填入
#[derive(Debug, Clone)]
pub struct CreatePictureRequest {
    pub student_id: i64,
    pub image_url: String,
}

impl CreatePictureRequest {
    /// 从表单中读取 student_id，返回尚未填写 image_url 的请求
    pub fn from_form(form: &FormFields) -> Result<Self, String> {
        form.require(&["student_id"])?;
        let student_id = form
            .i64("student_id")?
            .ok_or_else(|| "Missing required fields: student_id".to_string())?;

        Ok(Self {
            student_id,
            image_url: String::new(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PictureListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub student_id: Option<i64>,
}
