//! 缴费单存储操作

use super::SeaOrmStorage;
use crate::entity::vouchers::{ActiveModel, Entity as Vouchers};
use crate::errors::{Result, SchoolError};
use crate::models::vouchers::{
    entities::Voucher, requests::CreateVoucher, responses::VoucherDetail,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 保存缴费单快照
    pub async fn create_voucher_impl(&self, req: CreateVoucher) -> Result<Voucher> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            roll_number: Set(req.roll_number),
            amount: Set(req.amount),
            discount: Set(req.discount),
            total_payable: Set(req.total_payable),
            till_date: Set(req.till_date),
            generated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("生成缴费单失败: {e}")))?;

        Ok(result.into_voucher())
    }

    /// 缴费单详情；学生或班级已删除时对应名称为空
    pub async fn get_voucher_detail_impl(&self, voucher_id: i64) -> Result<Option<VoucherDetail>> {
        let Some(voucher) = Vouchers::find_by_id(voucher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询缴费单失败: {e}")))?
        else {
            return Ok(None);
        };

        let student = self.get_student_with_class_impl(voucher.student_id).await?;

        let (student_name, parent_name, class_name) = match student {
            Some(s) => (Some(s.student.name), s.student.parent_name, s.class_name),
            None => (None, None, None),
        };

        Ok(Some(VoucherDetail {
            voucher: voucher.into_voucher(),
            student_name,
            parent_name,
            class_name,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::CreateStudent;

    fn voucher_for(student_id: i64) -> CreateVoucher {
        CreateVoucher {
            student_id,
            roll_number: "1001".into(),
            amount: 5000.0,
            discount: 500.0,
            total_payable: 5000.0,
            till_date: Some("2025-04-10".into()),
        }
    }

    #[tokio::test]
    async fn test_voucher_detail_includes_names() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let class = storage.create_class_impl("Nine").await.unwrap();
        let student = storage
            .create_student_impl(CreateStudent {
                name: "Ahmed Khan".into(),
                email: "ahmed@school.test".into(),
                password_hash: "hash".into(),
                dob: None,
                gender: None,
                address: None,
                parent_name: Some("Khan Sr.".into()),
                parent_cnic: None,
                phone: None,
                class_id: Some(class.id),
                roll_number: Some("1001".into()),
            })
            .await
            .unwrap();

        let voucher = storage.create_voucher_impl(voucher_for(student.id)).await.unwrap();
        let detail = storage
            .get_voucher_detail_impl(voucher.id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(detail.voucher.total_payable, 5000.0);
        assert_eq!(detail.student_name.as_deref(), Some("Ahmed Khan"));
        assert_eq!(detail.parent_name.as_deref(), Some("Khan Sr."));
        assert_eq!(detail.class_name.as_deref(), Some("Nine"));
    }

    #[tokio::test]
    async fn test_voucher_detail_without_student() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let voucher = storage.create_voucher_impl(voucher_for(77)).await.unwrap();

        let detail = storage
            .get_voucher_detail_impl(voucher.id)
            .await
            .unwrap()
            .unwrap();
        assert!(detail.student_name.is_none());
        assert!(detail.class_name.is_none());

        assert!(storage.get_voucher_detail_impl(voucher.id + 1).await.unwrap().is_none());
    }
}
