use serde::Serialize;

use super::entities::Application;

// 管理员申请列表项（附带学生姓名、学号）
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationWithStudent {
    #[serde(flatten)]
    pub application: Application,
    pub student_name: Option<String>,
    pub roll_number: Option<String>,
}
