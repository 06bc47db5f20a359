use serde::Deserialize;

use crate::utils::form::trimmed;

use super::entities::UserRole;

// 管理员添加账号表单
#[derive(Debug, Deserialize)]
pub struct AddUserForm {
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    pub password: String,
}

// 存储层创建用户参数（密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
