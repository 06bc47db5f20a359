use serde::{Deserialize, Serialize};

// 教师授课分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherSubject {
    pub id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub class_id: i64,
}
