pub mod admin;

pub mod auth;

pub mod student;

pub mod teacher;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use student::configure_student_routes;
pub use teacher::configure_teacher_routes;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::web;

    use crate::models::users::{entities::UserRole, requests::CreateUser};
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
    use crate::utils::{SessionUtils, form_error_handler, path_error_handler, query_error_handler};

    pub async fn memory_storage() -> Arc<dyn Storage> {
        Arc::new(SeaOrmStorage::new_in_memory().await.unwrap())
    }

    /// 与生产环境相同的 app_data：存储与参数错误处理
    pub fn app_data(
        storage: &Arc<dyn Storage>,
    ) -> (
        web::Data<Arc<dyn Storage>>,
        web::FormConfig,
        web::QueryConfig,
        web::PathConfig,
    ) {
        (
            web::Data::new(storage.clone()),
            web::FormConfig::default().error_handler(form_error_handler),
            web::QueryConfig::default().error_handler(query_error_handler),
            web::PathConfig::default().error_handler(path_error_handler),
        )
    }

    /// 按邮箱签发会话 cookie，账号不存在时先创建
    pub async fn session_for(
        storage: &Arc<dyn Storage>,
        email: &str,
        role: UserRole,
    ) -> Cookie<'static> {
        let user = match storage.get_user_by_email(email).await.unwrap() {
            Some(user) => user,
            None => storage
                .create_user(CreateUser {
                    name: email.to_string(),
                    email: email.to_string(),
                    password_hash: String::new(),
                    role,
                })
                .await
                .unwrap(),
        };
        let token = SessionUtils::issue_token(&user).unwrap();
        SessionUtils::create_session_cookie(&token)
    }
}
