use serde::{Deserialize, Serialize};

// 教师档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub dob: Option<String>,
    pub email: String,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cnic: Option<String>,
}
