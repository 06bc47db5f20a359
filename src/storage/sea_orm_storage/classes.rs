//! 班级存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{Result, SchoolError};
use crate::models::classes::entities::Class;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, class_name: &str) -> Result<Class> {
        let model = ActiveModel {
            class_name: Set(class_name.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(write_error("创建班级失败"))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出全部班级（按创建顺序）
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let rows = Classes::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_class()).collect())
    }

    /// 重命名班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        class_name: &str,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        if self.get_class_by_id_impl(class_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(class_id),
            class_name: Set(class_name.to_string()),
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(write_error("更新班级失败"))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级，不级联删除学生、科目等引用记录
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::requests::CreateStudent;
    use crate::models::subjects::requests::SubjectForm;

    #[tokio::test]
    async fn test_duplicate_class_name_is_conflict() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage.create_class_impl("Seven").await.unwrap();
        let err = storage.create_class_impl("Seven").await.unwrap_err();
        assert!(err.is_conflict());
    }

    #[tokio::test]
    async fn test_rename_missing_class_is_none() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        assert!(
            storage
                .update_class_impl(42, "Eight")
                .await
                .unwrap()
                .is_none()
        );

        let class = storage.create_class_impl("Eigth").await.unwrap();
        let renamed = storage
            .update_class_impl(class.id, "Eight")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.class_name, "Eight");
    }

    #[tokio::test]
    async fn test_delete_class_leaves_dependents() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let class = storage.create_class_impl("Nine").await.unwrap();
        let subject = storage
            .create_subject_impl(SubjectForm {
                subject_name: "Physics".into(),
                class_id: Some(class.id),
            })
            .await
            .unwrap();
        let student = storage
            .create_student_impl(CreateStudent {
                name: "Sara".into(),
                email: "sara@school.test".into(),
                password_hash: "hash".into(),
                dob: None,
                gender: None,
                address: None,
                parent_name: None,
                parent_cnic: None,
                phone: None,
                class_id: Some(class.id),
                roll_number: Some("R-9".into()),
            })
            .await
            .unwrap();

        assert!(storage.delete_class_impl(class.id).await.unwrap());
        assert!(!storage.delete_class_impl(class.id).await.unwrap());

        // 引用记录仍然存在，班级 ID 悬空
        let orphan = storage
            .get_student_with_class_impl(student.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(orphan.student.class_id, Some(class.id));
        assert!(orphan.class_name.is_none());

        let subject = storage
            .get_subject_by_id_impl(subject.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(subject.class_id, Some(class.id));
    }
}
