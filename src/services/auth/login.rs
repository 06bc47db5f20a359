use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use actix_web::http::header::LOCATION;
use tracing::{error, info};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginForm, responses::LoginView},
};
use crate::utils::password::{verify_password, verify_placeholder};
use crate::utils::{SessionUtils, render_view};

use super::AuthService;

const LOGIN_FAILED: &str = "Invalid email or password.";

pub async fn handle_login_view(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let view = LoginView {
        system_name: service.get_config().app.system_name.clone(),
    };
    Ok(render_view(request, Some(view)))
}

pub async fn handle_login(
    service: &AuthService,
    login_form: LoginForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 根据邮箱获取用户
    let user = match storage.get_user_by_email(login_form.email.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            // 账号不存在时同样执行一次哈希校验
            verify_placeholder(&login_form.password);
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
        }
        Err(e) => {
            error!("Login lookup failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 验证密码，与邮箱不存在时返回相同提示
    if !verify_password(&login_form.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::AuthFailed, LOGIN_FAILED)));
    }

    // 3. 签发会话并跳转到对应门户
    match SessionUtils::issue_token(&user) {
        Ok(token) => {
            info!("User {} ({}) logged in", user.email, user.role);
            Ok(HttpResponse::SeeOther()
                .insert_header((LOCATION, user.role.portal_path()))
                .cookie(SessionUtils::create_session_cookie(&token))
                .finish())
        }
        Err(e) => {
            error!("Failed to issue session token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to create session",
                )),
            )
        }
    }
}
