use serde::{Deserialize, Serialize};

// 资料类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Lecture,
    Assignment,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialKind::Lecture => write!(f, "lecture"),
            MaterialKind::Assignment => write!(f, "assignment"),
        }
    }
}

impl std::str::FromStr for MaterialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lecture" => Ok(MaterialKind::Lecture),
            "assignment" => Ok(MaterialKind::Assignment),
            _ => Err(format!("Invalid material type: {s}")),
        }
    }
}

// 课程资料（讲义或作业），只保存元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file_name: Option<String>,
    pub subject_id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub kind: MaterialKind,
    pub due_date: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
