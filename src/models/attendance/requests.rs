use serde::Deserialize;

use super::entities::AttendanceStatus;
use crate::utils::form::{FormPairs, empty_as_none};
use crate::utils::validate::validate_iso_date;

// 考勤页面选择的班级/科目
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub subject_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

/// 一次批量考勤提交
///
/// 表单字段：`att_date`、`class_id`、`subject_id`、重复的 `student_ids`
/// 以及重复的 `present`。列出但未勾选 `present` 的学生记为缺勤。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSubmission {
    pub date: String,
    pub class_id: i64,
    pub subject_id: i64,
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceSubmission {
    pub fn from_pairs(form: &FormPairs<'_>) -> Result<Self, String> {
        let date = validate_iso_date(form.require("att_date")?).map_err(String::from)?;
        let class_id = form.require_parsed::<i64>("class_id")?;
        let subject_id = form.require_parsed::<i64>("subject_id")?;
        let student_ids = form.parse_all::<i64>("student_ids")?;
        let present = form.parse_all::<i64>("present")?;

        let mut entries: Vec<AttendanceEntry> = Vec::with_capacity(student_ids.len());
        for student_id in student_ids {
            if entries.iter().any(|e| e.student_id == student_id) {
                continue;
            }
            let status = if present.contains(&student_id) {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            entries.push(AttendanceEntry { student_id, status });
        }

        Ok(Self {
            date,
            class_id,
            subject_id,
            entries,
        })
    }
}
