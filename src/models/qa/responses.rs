use serde::Serialize;

use super::entities::QaThread;

// 教师看到的问题（附带学生、科目名称）
#[derive(Debug, Clone, Serialize)]
pub struct TeacherQuestionItem {
    #[serde(flatten)]
    pub thread: QaThread,
    pub student_name: Option<String>,
    pub subject_name: Option<String>,
}

// 学生看到的问题（附带教师、科目名称）
#[derive(Debug, Clone, Serialize)]
pub struct StudentQuestionItem {
    #[serde(flatten)]
    pub thread: QaThread,
    pub teacher_name: Option<String>,
    pub subject_name: Option<String>,
}

// 本班任课教师及其科目（去重）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassTeacherOption {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subject_id: i64,
    pub subject_name: String,
}

#[derive(Debug, Serialize)]
pub struct StudentQaView {
    pub teachers: Vec<ClassTeacherOption>,
    pub questions: Vec<StudentQuestionItem>,
}
