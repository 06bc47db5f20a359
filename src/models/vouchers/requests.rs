use serde::Deserialize;

use crate::utils::form::{empty_as_iso_date, empty_as_none};

#[derive(Debug, Clone, Deserialize)]
pub struct VoucherSearchQuery {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub roll_number: Option<String>,
}

// 生成缴费单表单
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateVoucherForm {
    pub student_id: i64,
    pub roll_number: String,
    pub base_amount: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub transport: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sports: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub discount: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_iso_date")]
    pub till_date: Option<String>,
}

// 存储层创建缴费单参数
#[derive(Debug, Clone)]
pub struct CreateVoucher {
    pub student_id: i64,
    pub roll_number: String,
    pub amount: f64,
    pub discount: f64,
    pub total_payable: f64,
    pub till_date: Option<String>,
}

impl GenerateVoucherForm {
    pub fn into_create(self) -> CreateVoucher {
        let discount = self.discount.unwrap_or(0.0);
        let total_payable = super::entities::compute_total(
            self.base_amount,
            self.transport.unwrap_or(0.0),
            self.sports.unwrap_or(0.0),
            discount,
        );
        CreateVoucher {
            student_id: self.student_id,
            roll_number: self.roll_number,
            amount: self.base_amount,
            discount,
            total_payable,
            till_date: self.till_date,
        }
    }
}
