use serde::Deserialize;

use crate::utils::form::{empty_as_iso_date, empty_as_none, trimmed};

// 添加教师表单：同时创建登录账号
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherForm {
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    pub password: String,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cnic: Option<String>,
}

// 编辑教师表单
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeacherForm {
    pub name: String,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub dob: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub cnic: Option<String>,
}

// 存储层创建教师参数
#[derive(Debug, Clone)]
pub struct CreateTeacher {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cnic: Option<String>,
}
