use serde::Serialize;

use super::entities::Lecture;
use crate::models::teacher_subjects::responses::AssignmentDetail;

// 资料列表项（附带科目、班级名称）
#[derive(Debug, Clone, Serialize)]
pub struct LectureWithNames {
    #[serde(flatten)]
    pub lecture: Lecture,
    pub subject_name: Option<String>,
    pub class_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TeacherLecturesView {
    pub assignments: Vec<AssignmentDetail>,
    pub lectures: Vec<LectureWithNames>,
}
