use serde::Deserialize;

// 添加/编辑班级表单
#[derive(Debug, Clone, Deserialize)]
pub struct ClassForm {
    pub class_name: String,
}
