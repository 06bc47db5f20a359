use serde::{Deserialize, Serialize};

// 成绩记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
    pub marks_obtained: i32,
    pub total_marks: i32,
    pub exam_type: String,
}
