use serde::Serialize;

use super::entities::Student;
use crate::models::classes::entities::Class;

// 学生列表项（附带班级名称）
#[derive(Debug, Clone, Serialize)]
pub struct StudentWithClass {
    #[serde(flatten)]
    pub student: Student,
    pub class_name: Option<String>,
}

// 添加/编辑学生页面
#[derive(Debug, Serialize)]
pub struct StudentFormView {
    pub student: Option<Student>,
    pub classes: Vec<Class>,
}
