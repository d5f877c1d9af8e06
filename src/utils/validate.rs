use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9 -]*$").expect("Invalid phone regex"));

/// 必填文本字段：去除首尾空白后不能为空
pub fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Missing required fields: {field}"));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), &'static str> {
    // 电话号码：整体 7-20 个字符（含开头的 +），允许数字、空格、连字符
    if !(7..=20).contains(&phone.len()) || !PHONE_RE.is_match(phone) {
        return Err("Phone number format is invalid");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text() {
        assert!(require_text("name", "Sara").is_ok());
        assert_eq!(
            require_text("name", "  \t"),
            Err("Missing required fields: name".to_string())
        );
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("parent@example.com").is_ok());
        assert!(validate_email("first.last+tag@school.edu.pk").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("parent@").is_err());
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("parent@example.c|m").is_err());
    }

    #[test]
    fn test_valid_phones() {
        assert!(validate_phone("+92 300 1234567").is_ok());
        assert!(validate_phone("0300-1234567").is_ok());
        assert!(validate_phone("1234567").is_ok());
        assert!(validate_phone("+123456").is_ok());
        assert!(validate_phone("+1234567890123456789").is_ok());
    }

    #[test]
    fn test_invalid_phones() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("+12345").is_err());
        assert!(validate_phone("+12345678901234567890").is_err());
        assert!(validate_phone("phone").is_err());
        assert!(validate_phone("+1 234 567 890 123 456 789").is_err());
    }
}
