//! 科目存储操作

use super::SeaOrmStorage;
use crate::entity::classes::Entity as Classes;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{Result, SchoolError};
use crate::models::subjects::{
    entities::Subject, requests::SubjectForm, responses::SubjectListItem,
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: SubjectForm) -> Result<Subject> {
        let model = ActiveModel {
            subject_name: Set(req.subject_name),
            class_id: Set(req.class_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let rows = Subjects::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 列出全部科目（附带班级名称）
    pub async fn list_subjects_with_class_impl(&self) -> Result<Vec<SubjectListItem>> {
        let rows = Subjects::find()
            .find_also_related(Classes)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(subject, class)| SubjectListItem {
                subject: subject.into_subject(),
                class_name: class.map(|c| c.class_name),
            })
            .collect())
    }

    /// 更新科目
    pub async fn update_subject_impl(
        &self,
        subject_id: i64,
        update: SubjectForm,
    ) -> Result<Option<Subject>> {
        if self.get_subject_by_id_impl(subject_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(subject_id),
            subject_name: Set(update.subject_name),
            class_id: Set(update.class_id),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新科目失败: {e}")))?;

        Ok(Some(result.into_subject()))
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, subject_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(subject_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subjects_list_with_class_names() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let class = storage.create_class_impl("Matric").await.unwrap();
        storage
            .create_subject_impl(SubjectForm {
                subject_name: "Chemistry".into(),
                class_id: Some(class.id),
            })
            .await
            .unwrap();
        storage
            .create_subject_impl(SubjectForm {
                subject_name: "Drawing".into(),
                class_id: None,
            })
            .await
            .unwrap();

        let items = storage.list_subjects_with_class_impl().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].class_name.as_deref(), Some("Matric"));
        assert!(items[1].class_name.is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete_subject() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let subject = storage
            .create_subject_impl(SubjectForm {
                subject_name: "Math".into(),
                class_id: None,
            })
            .await
            .unwrap();

        let updated = storage
            .update_subject_impl(
                subject.id,
                SubjectForm {
                    subject_name: "Mathematics".into(),
                    class_id: Some(3),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.subject_name, "Mathematics");
        assert_eq!(updated.class_id, Some(3));

        assert!(storage.delete_subject_impl(subject.id).await.unwrap());
        assert!(
            storage
                .get_subject_by_id_impl(subject.id)
                .await
                .unwrap()
                .is_none()
        );
    }
}
