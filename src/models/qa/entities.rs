use serde::{Deserialize, Serialize};

// 学生向教师提出的问题，`answer` 为空表示未回答
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaThread {
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: i64,
    pub subject_id: Option<i64>,
    pub question: String,
    pub answer: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
