use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AssignSubjectForm {
    pub teacher_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
}
