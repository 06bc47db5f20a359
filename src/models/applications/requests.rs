use serde::Deserialize;

use crate::utils::form::empty_as_none;

// 学生提交申请表单
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationForm {
    pub subject: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub send_to: Option<String>,
}

impl ApplicationForm {
    pub const DEFAULT_RECIPIENT: &'static str = "Admin";

    pub fn recipient(&self) -> &str {
        self.send_to.as_deref().unwrap_or(Self::DEFAULT_RECIPIENT)
    }
}
