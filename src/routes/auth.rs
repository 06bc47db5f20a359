use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::requests::LoginForm;
use crate::services::AuthService;
use crate::utils::see_other;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn index() -> HttpResponse {
    see_other("/login")
}

pub async fn login_view(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login_view(&req).await
}

pub async fn login(req: HttpRequest, form: web::Form<LoginForm>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(form.into_inner(), &req).await
}

pub async fn logout() -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(
            web::resource("/login")
                .route(web::get().to(login_view))
                .route(web::post().to(login)),
        )
        .route("/logout", web::get().to(logout));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::{entities::UserRole, requests::CreateUser};
    use crate::routes::test_support::{app_data, memory_storage};
    use crate::utils::password::hash_password;
    use actix_web::http::{StatusCode, header::LOCATION};
    use actix_web::{App, body::to_bytes, test};

    #[actix_web::test]
    async fn test_login_redirects_to_role_portal() {
        let storage = memory_storage().await;
        storage
            .create_user(CreateUser {
                name: "Ali Hassan".to_string(),
                email: "ali@school.com".to_string(),
                password_hash: hash_password("secret123").unwrap(),
                role: UserRole::Teacher,
            })
            .await
            .unwrap();

        let (data, form_cfg, query_cfg, path_cfg) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .app_data(query_cfg)
                .app_data(path_cfg)
                .configure(configure_auth_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ali@school.com"), ("password", "secret123")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some("/teacher")
        );
        let cookie = resp.response().cookies().next().unwrap();
        let session = crate::utils::SessionUtils::verify_token(cookie.value()).unwrap();
        assert_eq!(session.role, UserRole::Teacher);

        // 邮箱不存在与密码错误返回相同提示
        for (email, password) in [
            ("ali@school.com", "wrong"),
            ("nobody@school.com", "secret123"),
        ] {
            let req = test::TestRequest::post()
                .uri("/login")
                .set_form([("email", email), ("password", password)])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            let body = to_bytes(resp.into_body()).await.unwrap();
            let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(json["message"], "Invalid email or password.");
        }
    }

    #[actix_web::test]
    async fn test_index_and_logout_redirect_to_login() {
        let storage = memory_storage().await;
        let (data, ..) = app_data(&storage);
        let app =
            test::init_service(App::new().app_data(data).configure(configure_auth_routes)).await;

        for uri in ["/", "/logout"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(
                resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
                Some("/login")
            );
        }
    }

    #[actix_web::test]
    async fn test_missing_login_field_is_bad_request() {
        let storage = memory_storage().await;
        let (data, form_cfg, ..) = app_data(&storage);
        let app = test::init_service(
            App::new()
                .app_data(data)
                .app_data(form_cfg)
                .configure(configure_auth_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("email", "ali@school.com")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
