use serde::{Deserialize, Serialize};

// 班级学费标准
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub id: i64,
    pub class_id: i64,
    pub amount: f64,
    pub transport: f64,
    pub sports: f64,
}
