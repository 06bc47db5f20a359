//! 参数提取失败时的统一响应：400 + ApiResponse

use actix_web::error::{InternalError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request<E>(err: E, message: String) -> Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

/// 表单解析失败（缺少字段或类型错误）
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> Error {
    debug!("Form payload rejected for {}: {}", req.path(), err);
    let message = format!("Invalid form data: {err}");
    bad_request(err, message)
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string rejected for {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    bad_request(err, message)
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Path parameters rejected for {}: {}", req.path(), err);
    let message = format!("Invalid path parameters: {err}");
    bad_request(err, message)
}
