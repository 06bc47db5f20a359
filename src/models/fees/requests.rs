use serde::Deserialize;

use crate::utils::form::empty_as_none;

// 添加/编辑学费表单，交通费与体育费缺省为 0
#[derive(Debug, Clone, Deserialize)]
pub struct FeeForm {
    pub class_id: i64,
    pub amount: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub transport: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sports: Option<f64>,
}
