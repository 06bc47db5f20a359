use super::{SeaOrmStorage, write_error};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SchoolError};
use crate::models::users::{entities::User, requests::CreateUser};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUser) -> Result<User> {
        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(req.password_hash),
            role: Set(req.role.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(write_error("创建用户失败"))?;

        Ok(result.into_user())
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 用户总数
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计用户数量失败: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn new_user(email: &str) -> CreateUser {
        CreateUser {
            name: "Office".into(),
            email: email.into(),
            password_hash: "hash".into(),
            role: UserRole::Admin,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let user = storage
            .create_user_impl(new_user("office@school.test"))
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Admin);

        let found = storage
            .get_user_by_email_impl("office@school.test")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);
        assert!(
            storage
                .get_user_by_email_impl("nobody@school.test")
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(storage.count_users_impl().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        storage
            .create_user_impl(new_user("dup@school.test"))
            .await
            .unwrap();
        let err = storage
            .create_user_impl(new_user("dup@school.test"))
            .await
            .unwrap_err();
        assert!(err.is_conflict());
    }
}
