//! 缴费单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vouchers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub roll_number: String,
    pub amount: f64,
    pub discount: f64,
    pub total_payable: f64,
    pub till_date: Option<String>,
    pub generated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_voucher(self) -> crate::models::vouchers::entities::Voucher {
        use chrono::{DateTime, Utc};

        crate::models::vouchers::entities::Voucher {
            id: self.id,
            student_id: self.student_id,
            roll_number: self.roll_number,
            amount: self.amount,
            discount: self.discount,
            total_payable: self.total_payable,
            till_date: self.till_date,
            generated_at: DateTime::<Utc>::from_timestamp(self.generated_at, 0)
                .unwrap_or_default(),
        }
    }
}
