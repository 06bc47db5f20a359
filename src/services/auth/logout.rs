use actix_web::{HttpResponse, Result as ActixResult, http::header::LOCATION};

use crate::utils::SessionUtils;

/// 清除会话 cookie 并跳转到登录页
pub async fn handle_logout() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::SeeOther()
        .insert_header((LOCATION, "/login"))
        .cookie(SessionUtils::create_empty_session_cookie())
        .finish())
}
