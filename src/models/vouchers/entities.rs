use serde::{Deserialize, Serialize};

// 缴费单快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    pub id: i64,
    pub student_id: i64,
    pub roll_number: String,
    pub amount: f64,
    pub discount: f64,
    pub total_payable: f64,
    pub till_date: Option<String>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// 应缴总额 = 基础学费 + 交通费 + 体育费 - 减免
pub fn compute_total(base: f64, transport: f64, sports: f64, discount: f64) -> f64 {
    base + transport + sports - discount
}
