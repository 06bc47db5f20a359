use serde::Serialize;

// 登录页视图
#[derive(Debug, Serialize)]
pub struct LoginView {
    pub system_name: String,
}
