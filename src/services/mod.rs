pub mod admin;
pub mod auth;
pub mod student;
pub mod teacher;

pub use admin::AdminService;
pub use auth::AuthService;
pub use student::StudentService;
pub use teacher::TeacherService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::SchoolError;
use crate::models::{ApiResponse, ErrorCode};

/// 存储层异常统一返回 500
pub(crate) fn internal_error(context: &str, e: SchoolError) -> HttpResponse {
    error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {e}"),
    ))
}

/// 唯一约束冲突返回 409 与给定消息，其余按 500 处理
pub(crate) fn conflict_or_internal(
    e: SchoolError,
    code: ErrorCode,
    message: &str,
    context: &str,
) -> HttpResponse {
    if e.is_conflict() {
        tracing::info!("{}: {}", context, e);
        HttpResponse::Conflict().json(ApiResponse::error_empty(code, message))
    } else {
        internal_error(context, e)
    }
}

/// 表单内容无法解析时返回 400
pub(crate) fn bad_form(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message))
}
