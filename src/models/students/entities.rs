use serde::{Deserialize, Serialize};

// 学生档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub parent_name: Option<String>,
    pub parent_cnic: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub class_id: Option<i64>,
    pub roll_number: String,
}

/// 会话邮箱解析出的学生身份
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentIdentity {
    pub student_id: i64,
    pub class_id: Option<i64>,
}
