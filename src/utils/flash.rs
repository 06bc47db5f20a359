//! 一次性提示消息
//!
//! 写操作成功后以 `303 See Other` 跳转，并通过 cookie 携带 `类别|消息`；
//! 下一个视图读取后清除。

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::config::AppConfig;
use crate::models::ApiResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub category: String,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            category: "warning".to_string(),
            message: message.into(),
        }
    }

    pub fn encode(&self) -> String {
        format!("{}|{}", self.category, self.message)
    }

    /// 解析 `类别|消息`，缺少分隔符时整体视为消息
    pub fn decode(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let (category, message) = raw.split_once('|').unwrap_or(("info", raw));
        Some(Self {
            category: category.to_string(),
            message: message.to_string(),
        })
    }
}

fn cookie_name() -> &'static str {
    &AppConfig::get().session.flash_cookie_name
}

fn flash_cookie(value: String) -> Cookie<'static> {
    Cookie::build(cookie_name().to_string(), value)
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .finish()
}

/// 清除提示 cookie
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = flash_cookie(String::new());
    cookie.make_removal();
    cookie
}

/// 读取请求携带的提示消息
pub fn peek_flash(req: &HttpRequest) -> Option<Flash> {
    req.cookie(cookie_name())
        .and_then(|cookie| Flash::decode(cookie.value()))
}

/// 303 跳转
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location.to_string()))
        .finish()
}

/// 303 跳转并附带提示消息
pub fn redirect_with_flash(location: &str, flash: Flash) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location.to_string()))
        .cookie(flash_cookie(flash.encode()))
        .finish()
}

/// 成功写操作后的标准跳转
pub fn redirect_success(location: &str, message: impl Into<String>) -> HttpResponse {
    redirect_with_flash(location, Flash::success(message))
}

/// 视图响应：返回视图模型，并把待显示的提示消息放入 `message` 后清除
pub fn render_view<T: Serialize>(req: &HttpRequest, data: Option<T>) -> HttpResponse {
    match peek_flash(req) {
        Some(flash) => HttpResponse::Ok()
            .cookie(removal_cookie())
            .json(ApiResponse::view(data, flash.message)),
        None => HttpResponse::Ok().json(ApiResponse::view(data, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, test::TestRequest};

    #[test]
    fn test_flash_encoding() {
        let flash = Flash::success("Student added.");
        assert_eq!(flash.encode(), "success|Student added.");
        assert_eq!(Flash::decode("success|Student added."), Some(flash));
        assert_eq!(
            Flash::decode("Saved|with|pipes").map(|f| f.message),
            Some("with|pipes".to_string())
        );
        assert_eq!(Flash::decode(""), None);
    }

    #[test]
    fn test_redirect_sets_location_and_cookie() {
        let resp = redirect_success("/admin/classes", "Class added.");
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some("/admin/classes")
        );
        let cookie = resp.cookies().next().unwrap();
        assert_eq!(cookie.name(), "flash");
        assert_eq!(cookie.value(), "success|Class added.");
    }

    #[actix_web::test]
    async fn test_view_consumes_flash() {
        let req = TestRequest::default()
            .cookie(Cookie::new("flash", "success|Fee added."))
            .to_http_request();
        let resp = render_view(&req, Some(vec![1, 2, 3]));
        assert_eq!(resp.status(), StatusCode::OK);

        let removal = resp.cookies().next().unwrap();
        assert_eq!(removal.name(), "flash");
        assert_eq!(removal.value(), "");

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Fee added.");
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
    }
}
