use std::collections::HashMap;

use serde::Deserialize;

use crate::utils::form::{FormPairs, empty_as_none};
use crate::utils::validate::parse_marks_field;

// 成绩页面选择的班级/科目/考试
#[derive(Debug, Clone, Deserialize)]
pub struct MarksQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub subject_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub exam_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkEntry {
    pub student_id: i64,
    pub marks_obtained: i32,
}

/// 一次批量成绩提交
///
/// 每个 `student_ids` 对应一个 `marks_{student_id}` 字段，缺省为 0。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarksSubmission {
    pub class_id: i64,
    pub subject_id: i64,
    pub exam_type: String,
    pub total_marks: i32,
    pub entries: Vec<MarkEntry>,
}

impl MarksSubmission {
    pub fn from_pairs(form: &FormPairs<'_>) -> Result<Self, String> {
        let class_id = form.require_parsed::<i64>("class_id")?;
        let subject_id = form.require_parsed::<i64>("subject_id")?;
        let exam_type = form.require("exam_type")?.to_string();
        let total_marks = form.require_parsed::<i32>("total_marks")?;
        let student_ids = form.parse_all::<i64>("student_ids")?;

        // marks_{student_id} 字段按学生 ID 索引
        let mut marks: HashMap<i64, &str> = HashMap::new();
        for (key, value) in form.iter() {
            if let Some(id) = parse_marks_field(key) {
                marks.entry(id).or_insert(value.trim());
            }
        }

        let mut entries: Vec<MarkEntry> = Vec::with_capacity(student_ids.len());
        for student_id in student_ids {
            if entries.iter().any(|e| e.student_id == student_id) {
                continue;
            }
            let marks_obtained = match marks.get(&student_id).copied() {
                None | Some("") => 0,
                Some(raw) => raw
                    .parse::<i32>()
                    .map_err(|_| format!("Invalid value for field: marks_{student_id}"))?,
            };
            entries.push(MarkEntry {
                student_id,
                marks_obtained,
            });
        }

        Ok(Self {
            class_id,
            subject_id,
            exam_type,
            total_marks,
            entries,
        })
    }
}
