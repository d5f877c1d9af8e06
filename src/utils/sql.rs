use sea_orm::sea_query::LikeExpr;

/// 转义 LIKE 模式中的通配符，避免用户输入的 `%`、`_` 被当作通配符
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 构造带 ESCAPE 子句的子串匹配表达式（SQLite 没有默认转义字符）
pub fn contains_pattern(input: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(input.trim()))).escape('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern() {
        assert_eq!(escape_like_pattern("Ali"), "Ali");
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("roll_no"), "roll\\_no");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
