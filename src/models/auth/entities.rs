use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};

use crate::models::users::entities::UserRole;

/// 当前请求的会话身份，由会话中间件写入请求扩展
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: i64,
    pub name: String,
    pub role: UserRole,
    pub email: String,
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionContext>()
                .cloned()
                .ok_or_else(|| actix_web::error::ErrorUnauthorized("No active session")),
        )
    }
}
