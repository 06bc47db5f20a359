use serde::Deserialize;

use super::entities::MaterialKind;
use crate::utils::form::{empty_as_iso_date, empty_as_none};

// 上传资料表单
#[derive(Debug, Clone, Deserialize)]
pub struct LectureForm {
    pub title: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub file_name: Option<String>,
    pub subject_id: i64,
    pub class_id: i64,
    #[serde(rename = "type", alias = "kind", default, deserialize_with = "empty_as_none")]
    pub kind: Option<MaterialKind>,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub due_date: Option<String>,
}

// 存储层创建资料参数
#[derive(Debug, Clone)]
pub struct CreateLecture {
    pub title: String,
    pub description: Option<String>,
    pub file_name: Option<String>,
    pub subject_id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub kind: MaterialKind,
    pub due_date: Option<String>,
}

impl LectureForm {
    pub fn into_create(self, teacher_id: i64) -> CreateLecture {
        CreateLecture {
            title: self.title,
            description: self.description,
            file_name: self.file_name,
            subject_id: self.subject_id,
            class_id: self.class_id,
            teacher_id,
            kind: self.kind.unwrap_or_default(),
            due_date: self.due_date,
        }
    }
}
