use serde::Deserialize;

use crate::utils::form::empty_as_none;

// 添加/编辑科目表单
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectForm {
    pub subject_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<i64>,
}
