use serde::Serialize;

use super::entities::MarkRecord;
use crate::models::{students::entities::Student, teacher_subjects::responses::AssignmentDetail};

#[derive(Debug, Clone, Serialize)]
pub struct MarksSelection {
    pub class_id: i64,
    pub subject_id: i64,
    pub exam_type: String,
}

// 教师成绩录入页面；`existing` 为该次考试已录入的成绩
#[derive(Debug, Serialize)]
pub struct TeacherMarksView {
    pub assignments: Vec<AssignmentDetail>,
    pub selected: Option<MarksSelection>,
    pub students: Vec<Student>,
    pub existing: Vec<MarkRecord>,
}

// 学生成绩（附带科目名称）
#[derive(Debug, Clone, Serialize)]
pub struct MarkWithSubject {
    #[serde(flatten)]
    pub record: MarkRecord,
    pub subject_name: Option<String>,
}
