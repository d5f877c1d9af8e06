use crate::models::common::{PaginationQuery, deserialize_option_string_to_i64};
use crate::utils::multipart::FormFields;
use crate::utils::validate::{validate_email, validate_phone};
use serde::Deserialize;
use ts_rs::TS;

// 学生查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    #[serde(default, deserialize_with = "deserialize_option_string_to_i64")]
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

// 创建学生请求（由 multipart 表单构造，profile_pic 在上传后填入）
#[derive(Debug, Clone, Default)]
pub struct CreateStudentRequest {
    pub name: String,
    pub father_name: Option<String>,
    pub father_cnic: Option<String>,
    pub mother_name: Option<String>,
    pub mother_cnic: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub roll_no: String,
    pub class_id: Option<i64>,
    pub fee_id: Option<i64>,
    pub profile_pic: Option<String>,
    pub admission_date: Option<chrono::NaiveDate>,
}

impl CreateStudentRequest {
    pub const REQUIRED_FIELDS: [&'static str; 2] = ["name", "roll_no"];

    pub fn from_form(form: &FormFields) -> Result<Self, String> {
        form.require(&Self::REQUIRED_FIELDS)?;

        let request = Self {
            name: form.text("name").unwrap_or_default(),
            father_name: form.text("father_name"),
            father_cnic: form.text("father_cnic"),
            mother_name: form.text("mother_name"),
            mother_cnic: form.text("mother_cnic"),
            phone: form.text("phone"),
            email: form.text("email"),
            address: form.text("address"),
            roll_no: form.text("roll_no").unwrap_or_default(),
            class_id: form.i64("class_id")?,
            fee_id: form.i64("fee_id")?,
            profile_pic: None,
            admission_date: form.date("admission_date")?,
        };

        validate_contact(request.email.as_deref(), request.phone.as_deref())?;
        Ok(request)
    }
}

// 更新学生请求，仅包含表单中出现的字段
#[derive(Debug, Clone, Default)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub father_name: Option<String>,
    pub father_cnic: Option<String>,
    pub mother_name: Option<String>,
    pub mother_cnic: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub roll_no: Option<String>,
    pub class_id: Option<i64>,
    pub fee_id: Option<i64>,
    pub profile_pic: Option<String>,
    pub admission_date: Option<chrono::NaiveDate>,
}

impl UpdateStudentRequest {
    pub fn from_form(form: &FormFields) -> Result<Self, String> {
        let request = Self {
            name: form.text("name"),
            father_name: form.text("father_name"),
            father_cnic: form.text("father_cnic"),
            mother_name: form.text("mother_name"),
            mother_cnic: form.text("mother_cnic"),
            phone: form.text("phone"),
            email: form.text("email"),
            address: form.text("address"),
            roll_no: form.text("roll_no"),
            class_id: form.i64("class_id")?,
            fee_id: form.i64("fee_id")?,
            profile_pic: None,
            admission_date: form.date("admission_date")?,
        };

        validate_contact(request.email.as_deref(), request.phone.as_deref())?;
        Ok(request)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.father_name.is_none()
            && self.father_cnic.is_none()
            && self.mother_name.is_none()
            && self.mother_cnic.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.roll_no.is_none()
            && self.class_id.is_none()
            && self.fee_id.is_none()
            && self.profile_pic.is_none()
            && self.admission_date.is_none()
    }
}

fn validate_contact(email: Option<&str>, phone: Option<&str>) -> Result<(), String> {
    if let Some(email) = email {
        validate_email(email).map_err(str::to_string)?;
    }
    if let Some(phone) = phone {
        validate_phone(phone).map_err(str::to_string)?;
    }
    Ok(())
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormFields {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_create_reports_all_missing_fields() {
        let err = CreateStudentRequest::from_form(&form(&[("father_name", "Ali")])).unwrap_err();
        assert_eq!(err, "Missing required fields: name, roll_no");
    }

    #[test]
    fn test_blank_required_field_counts_as_missing() {
        let err = CreateStudentRequest::from_form(&form(&[("name", "   "), ("roll_no", "12")]))
            .unwrap_err();
        assert_eq!(err, "Missing required fields: name");
    }

    #[test]
    fn test_create_parses_typed_fields() {
        let request = CreateStudentRequest::from_form(&form(&[
            ("name", " Sara Khan "),
            ("roll_no", "A-17"),
            ("class_id", "3"),
            ("admission_date", "2024-04-01"),
            ("email", "sara@example.com"),
        ]))
        .unwrap();
        assert_eq!(request.name, "Sara Khan");
        assert_eq!(request.class_id, Some(3));
        assert_eq!(
            request.admission_date,
            chrono::NaiveDate::from_ymd_opt(2024, 4, 1)
        );
        assert!(request.profile_pic.is_none());
    }

    #[test]
    fn test_create_rejects_bad_contact() {
        let err = CreateStudentRequest::from_form(&form(&[
            ("name", "Sara"),
            ("roll_no", "1"),
            ("email", "not-an-email"),
        ]))
        .unwrap_err();
        assert_eq!(err, "Email format is invalid");
    }

    #[test]
    fn test_update_only_keeps_present_fields() {
        let request = UpdateStudentRequest::from_form(&form(&[("phone", "+92 300 1234567")]))
            .unwrap();
        assert_eq!(request.phone.as_deref(), Some("+92 300 1234567"));
        assert!(request.name.is_none());
        assert!(!request.is_empty());
        assert!(UpdateStudentRequest::from_form(&form(&[])).unwrap().is_empty());
    }
}
