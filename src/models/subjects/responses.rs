use serde::Serialize;

use super::entities::Subject;
use crate::models::classes::entities::Class;

// 科目列表项（附带班级名称）
#[derive(Debug, Clone, Serialize)]
pub struct SubjectListItem {
    #[serde(flatten)]
    pub subject: Subject,
    pub class_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubjectListView {
    pub subjects: Vec<SubjectListItem>,
    pub classes: Vec<Class>,
}

#[derive(Debug, Serialize)]
pub struct SubjectEditView {
    pub subject: Subject,
    pub classes: Vec<Class>,
}
