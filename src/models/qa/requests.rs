use serde::Deserialize;

use crate::utils::form::empty_as_none;

// 学生提问表单
#[derive(Debug, Clone, Deserialize)]
pub struct AskQuestionForm {
    pub teacher_id: i64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub subject_id: Option<i64>,
    pub question: String,
}

// 教师回答表单
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerQuestionForm {
    pub qa_id: i64,
    pub answer: String,
}
