//! 教师档案存储操作

use super::{SeaOrmStorage, write_error};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{Result, SchoolError};
use crate::models::{
    teachers::{
        entities::Teacher,
        requests::{CreateTeacher, UpdateTeacherForm},
    },
    users::entities::UserRole,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师及其登录账号
    pub async fn create_teacher_impl(&self, req: CreateTeacher) -> Result<Teacher> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        let user = UserActiveModel {
            name: Set(req.name.clone()),
            email: Set(req.email.clone()),
            password_hash: Set(req.password_hash),
            role: Set(UserRole::Teacher.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(write_error("创建教师账号失败"))?;

        let teacher = ActiveModel {
            user_id: Set(Some(user.id)),
            name: Set(req.name),
            dob: Set(req.dob),
            email: Set(req.email),
            gender: Set(req.gender),
            phone: Set(req.phone),
            address: Set(req.address),
            cnic: Set(req.cnic),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(write_error("创建教师档案失败"))?;

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(teacher.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过登录邮箱解析教师 ID
    pub async fn find_teacher_id_by_email_impl(&self, email: &str) -> Result<Option<i64>> {
        Teachers::find()
            .select_only()
            .column(Column::Id)
            .filter(Column::Email.eq(email))
            .into_tuple::<i64>()
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师身份失败: {e}")))
    }

    /// 列出全部教师（最新在前）
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let rows = Teachers::find()
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 更新教师档案（邮箱不变）
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        update: UpdateTeacherForm,
    ) -> Result<Option<Teacher>> {
        if self.get_teacher_by_id_impl(teacher_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(teacher_id),
            name: Set(update.name),
            dob: Set(update.dob),
            gender: Set(update.gender),
            phone: Set(update.phone),
            address: Set(update.address),
            cnic: Set(update.cnic),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新教师失败: {e}")))?;

        Ok(Some(result.into_teacher()))
    }

    /// 删除教师档案及其登录账号
    pub async fn delete_teacher_impl(&self, teacher_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(teacher) = Teachers::find_by_id(teacher_id)
            .one(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?
        else {
            return Ok(false);
        };

        Teachers::delete_by_id(teacher.id)
            .exec(&txn)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除教师失败: {e}")))?;

        if let Some(user_id) = teacher.user_id {
            Users::delete_by_id(user_id)
                .exec(&txn)
                .await
                .map_err(|e| SchoolError::database_operation(format!("删除教师账号失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_teacher(email: &str) -> CreateTeacher {
        CreateTeacher {
            name: "Ali Hassan".into(),
            email: email.into(),
            password_hash: "hash".into(),
            dob: None,
            gender: Some("Male".into()),
            phone: None,
            address: None,
            cnic: Some("42101-1234567-1".into()),
        }
    }

    #[tokio::test]
    async fn test_create_teacher_and_resolve_by_email() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let teacher = storage
            .create_teacher_impl(new_teacher("ali@school.test"))
            .await
            .unwrap();

        let user = storage
            .get_user_by_email_impl("ali@school.test")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.role, UserRole::Teacher);
        assert_eq!(teacher.user_id, Some(user.id));
        assert_eq!(
            storage
                .find_teacher_id_by_email_impl("ali@school.test")
                .await
                .unwrap(),
            Some(teacher.id)
        );
        assert_eq!(
            storage
                .find_teacher_id_by_email_impl("ghost@school.test")
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_duplicate_teacher_email_leaves_single_user() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_teacher_impl(new_teacher("dup@school.test"))
            .await
            .unwrap();
        let err = storage
            .create_teacher_impl(new_teacher("dup@school.test"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(storage.count_users_impl().await.unwrap(), 1);
        assert_eq!(storage.list_teachers_impl().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_teacher() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let teacher = storage
            .create_teacher_impl(new_teacher("edit@school.test"))
            .await
            .unwrap();

        let updated = storage
            .update_teacher_impl(
                teacher.id,
                UpdateTeacherForm {
                    name: "Ali H.".into(),
                    dob: Some("1985-06-15".into()),
                    gender: None,
                    phone: Some("0300-1234567".into()),
                    address: None,
                    cnic: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ali H.");
        assert_eq!(updated.email, "edit@school.test");

        assert!(
            storage
                .update_teacher_impl(
                    999,
                    UpdateTeacherForm {
                        name: "Nobody".into(),
                        dob: None,
                        gender: None,
                        phone: None,
                        address: None,
                        cnic: None,
                    },
                )
                .await
                .unwrap()
                .is_none()
        );

        assert!(storage.delete_teacher_impl(teacher.id).await.unwrap());
        assert_eq!(storage.count_users_impl().await.unwrap(), 0);
    }
}
