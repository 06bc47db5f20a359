use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AdminService;
use crate::models::{
    ErrorCode,
    users::{
        entities::UserRole,
        requests::{AddUserForm, CreateUser},
    },
};
use crate::services::{conflict_or_internal, internal_error};
use crate::utils::password::hash_password;
use crate::utils::{redirect_success, render_view};

pub async fn add_user_view(request: &HttpRequest) -> ActixResult<HttpResponse> {
    Ok(render_view::<()>(request, None))
}

/// 新增管理员账号
pub async fn add_user(
    service: &AdminService,
    request: &HttpRequest,
    form: AddUserForm,
) -> ActixResult<HttpResponse> {
    let password_hash = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(internal_error("Failed to hash password", e)),
    };

    let create = CreateUser {
        name: form.name,
        email: form.email,
        password_hash,
        role: UserRole::Admin,
    };

    match service.get_storage(request).create_user(create).await {
        Ok(user) => {
            info!("Admin user {} added", user.email);
            Ok(redirect_success("/admin", "Admin user added!"))
        }
        Err(e) => Ok(conflict_or_internal(
            e,
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists.",
            "Admin user creation failed",
        )),
    }
}
