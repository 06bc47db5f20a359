use serde::Serialize;

use crate::models::{
    classes::entities::Class, subjects::entities::Subject, teachers::entities::Teacher,
};

// 分配详情（附带教师、科目、班级名称）
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentDetail {
    pub id: i64,
    pub teacher_id: i64,
    pub teacher_name: Option<String>,
    pub subject_id: i64,
    pub subject_name: Option<String>,
    pub class_id: i64,
    pub class_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssignSubjectView {
    pub teachers: Vec<Teacher>,
    pub classes: Vec<Class>,
    pub subjects: Vec<Subject>,
    pub assignments: Vec<AssignmentDetail>,
}
