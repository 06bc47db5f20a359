use once_cell::sync::Lazy;
use regex::Regex;

static MARKS_FIELD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^marks_(\d+)$").expect("Invalid marks field regex"));

/// 解析 `YYYY-MM-DD` 格式日期，返回规范化后的字符串
pub fn validate_iso_date(value: &str) -> Result<String, &'static str> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| "Date must be in YYYY-MM-DD format")
}

/// 从 `marks_{student_id}` 字段名中取出学生 ID
pub fn parse_marks_field(name: &str) -> Option<i64> {
    MARKS_FIELD_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_iso_date() {
        assert_eq!(validate_iso_date("2025-03-01").as_deref(), Ok("2025-03-01"));
        assert_eq!(validate_iso_date(" 2025-3-1 ").as_deref(), Ok("2025-03-01"));
        assert!(validate_iso_date("01/03/2025").is_err());
        assert!(validate_iso_date("2025-02-30").is_err());
        assert!(validate_iso_date("").is_err());
    }

    #[test]
    fn test_parse_marks_field() {
        assert_eq!(parse_marks_field("marks_12"), Some(12));
        assert_eq!(parse_marks_field("marks_"), None);
        assert_eq!(parse_marks_field("marks_x1"), None);
        assert_eq!(parse_marks_field("total_marks"), None);
        assert_eq!(parse_marks_field("student_ids"), None);
    }
}
