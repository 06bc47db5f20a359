use serde::Deserialize;

use crate::utils::form::{empty_as_iso_date, empty_as_none, trimmed};

// 添加学生表单：同时创建登录账号
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentForm {
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    pub password: String,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub parent_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub parent_cnic: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub roll_number: Option<String>,
}

// 编辑学生表单（邮箱与学号不可修改）
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentForm {
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub parent_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub parent_cnic: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub class_id: Option<i64>,
}

// 存储层创建学生参数
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub parent_name: Option<String>,
    pub parent_cnic: Option<String>,
    pub phone: Option<String>,
    pub class_id: Option<i64>,
    /// 为空时按现有学生数量生成
    pub roll_number: Option<String>,
}
