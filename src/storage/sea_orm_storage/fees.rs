//! 学费存储操作，每个班级至多一条

use super::{SeaOrmStorage, write_error};
use crate::entity::classes::Entity as Classes;
use crate::entity::fees::{ActiveModel, Column, Entity as Fees};
use crate::errors::{Result, SchoolError};
use crate::models::fees::{entities::Fee, requests::FeeForm, responses::FeeWithClass};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 添加学费，班级已有学费时返回冲突
    pub async fn create_fee_impl(&self, req: FeeForm) -> Result<Fee> {
        let model = ActiveModel {
            class_id: Set(req.class_id),
            amount: Set(req.amount),
            transport: Set(req.transport.unwrap_or(0.0)),
            sports: Set(req.sports.unwrap_or(0.0)),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(write_error("添加学费失败"))?;

        Ok(result.into_fee())
    }

    pub async fn get_fee_by_id_impl(&self, fee_id: i64) -> Result<Option<Fee>> {
        let result = Fees::find_by_id(fee_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学费失败: {e}")))?;

        Ok(result.map(|m| m.into_fee()))
    }

    /// 班级学费标准
    pub async fn get_fee_by_class_impl(&self, class_id: i64) -> Result<Option<Fee>> {
        let result = Fees::find()
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级学费失败: {e}")))?;

        Ok(result.map(|m| m.into_fee()))
    }

    /// 全部学费（附带班级名称）
    pub async fn list_fees_with_class_impl(&self) -> Result<Vec<FeeWithClass>> {
        let rows = Fees::find()
            .find_also_related(Classes)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学费列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(fee, class)| FeeWithClass {
                fee: fee.into_fee(),
                class_name: class.map(|c| c.class_name),
            })
            .collect())
    }

    /// 更新学费
    pub async fn update_fee_impl(&self, fee_id: i64, update: FeeForm) -> Result<Option<Fee>> {
        if self.get_fee_by_id_impl(fee_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(fee_id),
            class_id: Set(update.class_id),
            amount: Set(update.amount),
            transport: Set(update.transport.unwrap_or(0.0)),
            sports: Set(update.sports.unwrap_or(0.0)),
        };

        let result = model.update(&self.db).await.map_err(write_error("更新学费失败"))?;

        Ok(Some(result.into_fee()))
    }

    pub async fn delete_fee_impl(&self, fee_id: i64) -> Result<bool> {
        let result = Fees::delete_by_id(fee_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除学费失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fee_form(class_id: i64, amount: f64) -> FeeForm {
        FeeForm {
            class_id,
            amount,
            transport: None,
            sports: Some(200.0),
        }
    }

    #[tokio::test]
    async fn test_one_fee_per_class() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let class = storage.create_class_impl("Matric").await.unwrap();

        let fee = storage.create_fee_impl(fee_form(class.id, 5000.0)).await.unwrap();
        assert_eq!(fee.transport, 0.0);
        assert_eq!(fee.sports, 200.0);

        let err = storage
            .create_fee_impl(fee_form(class.id, 6000.0))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let listed = storage.list_fees_with_class_impl().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].class_name.as_deref(), Some("Matric"));
    }

    #[tokio::test]
    async fn test_update_and_delete_fee() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let fee = storage.create_fee_impl(fee_form(1, 1000.0)).await.unwrap();

        let updated = storage
            .update_fee_impl(fee.id, fee_form(1, 1500.0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.amount, 1500.0);
        assert_eq!(
            storage.get_fee_by_class_impl(1).await.unwrap().map(|f| f.id),
            Some(fee.id)
        );
        assert!(
            storage
                .update_fee_impl(fee.id + 1, fee_form(2, 1.0))
                .await
                .unwrap()
                .is_none()
        );

        assert!(storage.delete_fee_impl(fee.id).await.unwrap());
        assert!(storage.get_fee_by_class_impl(1).await.unwrap().is_none());
    }
}
