//! 表单辅助工具
//!
//! HTML 表单会把空输入框提交为空字符串，这里统一把空值视为未填写；
//! 对于重复字段（如 `student_ids`），使用原始键值对列表读取。

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::utils::validate::validate_iso_date;

/// 空字符串反序列化为 `None`，其余按 `FromStr` 解析
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// 去除首尾空白后的字符串字段（如邮箱）
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

/// 可选的 `YYYY-MM-DD` 日期字段，空值为 `None`，非法日期返回错误
///
/// 存储前统一补零，保证按文本比较日期时顺序正确。
pub fn empty_as_iso_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => validate_iso_date(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// 原始表单键值对，保留重复键
pub struct FormPairs<'a> {
    pairs: &'a [(String, String)],
}

impl<'a> FormPairs<'a> {
    pub fn new(pairs: &'a [(String, String)]) -> Self {
        Self { pairs }
    }

    /// 第一个同名字段的值
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 所有同名字段的值，按提交顺序
    pub fn get_all(&self, key: &str) -> Vec<&'a str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// 必填字段
    pub fn require(&self, key: &str) -> Result<&'a str, String> {
        match self.get(key).map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(format!("Missing field: {key}")),
        }
    }

    /// 必填字段并解析
    pub fn require_parsed<T: FromStr>(&self, key: &str) -> Result<T, String> {
        self.require(key)?
            .parse::<T>()
            .map_err(|_| format!("Invalid value for field: {key}"))
    }

    /// 重复字段并逐个解析
    pub fn parse_all<T: FromStr>(&self, key: &str) -> Result<Vec<T>, String> {
        self.get_all(key)
            .into_iter()
            .map(|v| {
                v.trim()
                    .parse::<T>()
                    .map_err(|_| format!("Invalid value for field: {key}"))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "empty_as_none")]
        class_id: Option<i64>,
        #[serde(default, deserialize_with = "empty_as_iso_date")]
        end_date: Option<String>,
    }

    #[derive(Deserialize)]
    struct Login {
        #[serde(deserialize_with = "trimmed")]
        email: String,
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_values_become_none() {
        let s: Sample = serde_json::from_str(r#"{"class_id": "", "end_date": "  "}"#).unwrap();
        assert!(s.class_id.is_none());
        assert!(s.end_date.is_none());

        let s: Sample = serde_json::from_str(r#"{}"#).unwrap();
        assert!(s.class_id.is_none());

        let s: Sample =
            serde_json::from_str(r#"{"class_id": "4", "end_date": "2025-01-01"}"#).unwrap();
        assert_eq!(s.class_id, Some(4));
        assert_eq!(s.end_date.as_deref(), Some("2025-01-01"));
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let r: Result<Sample, _> = serde_json::from_str(r#"{"class_id": "four"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_dates_are_normalized_or_rejected() {
        let s: Sample = serde_json::from_str(r#"{"end_date": " 2026-9-1 "}"#).unwrap();
        assert_eq!(s.end_date.as_deref(), Some("2026-09-01"));

        for bad in ["01/09/2026", "2026-02-30", "next week"] {
            let body = format!(r#"{{"end_date": "{bad}"}}"#);
            assert!(serde_json::from_str::<Sample>(&body).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_trimmed_field() {
        let l: Login = serde_json::from_str(r#"{"email": "  zed@school.com "}"#).unwrap();
        assert_eq!(l.email, "zed@school.com");
    }

    #[test]
    fn test_repeated_keys() {
        let raw = pairs(&[
            ("student_ids", "1"),
            ("student_ids", "2"),
            ("present", "2"),
            ("class_id", "3"),
        ]);
        let form = FormPairs::new(&raw);
        assert_eq!(form.get_all("student_ids"), vec!["1", "2"]);
        assert_eq!(form.parse_all::<i64>("present").unwrap(), vec![2]);
        assert_eq!(form.require_parsed::<i64>("class_id").unwrap(), 3);
        assert!(form.require("subject_id").is_err());
        assert!(form.get_all("missing").is_empty());
    }
}
