use serde::Deserialize;

use crate::utils::form::trimmed;

// 登录表单
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    pub password: String,
}
