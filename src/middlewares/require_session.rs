/*!
 * 会话中间件
 *
 * 校验会话 cookie（或 `Authorization: Bearer <token>` 请求头），
 * 通过后把 `SessionContext` 写入请求扩展，处理程序可直接将其作为参数提取：
 *
 * ```rust,ignore
 * web::scope("/admin")
 *     .wrap(RequireRole::new(UserRole::Admin))
 *     .wrap(RequireSession)
 * ```
 *
 * 注意 actix 中后注册的 `wrap` 先执行，因此 `RequireSession` 需写在 `RequireRole` 之后。
 * 会话缺失或无法解析时以 303 跳转到 `/login`。
 */

use crate::models::auth::entities::SessionContext;
use crate::utils::SessionUtils;
use crate::utils::flash::see_other;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";
const LOGIN_PATH: &str = "/login";

#[derive(Clone)]
pub struct RequireSession;

// 优先读取 cookie，其次读取 Bearer 令牌
fn extract_token(req: &HttpRequest) -> Option<String> {
    SessionUtils::extract_token_from_cookie(req).or_else(|| {
        req.headers()
            .get(AUTHORIZATION_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix(BEARER_PREFIX))
            .map(str::to_string)
    })
}

fn resolve_session(req: &HttpRequest) -> Result<SessionContext, &'static str> {
    let token = extract_token(req).ok_or("Missing session")?;
    SessionUtils::verify_token(&token).map_err(|err| {
        info!("Session token validation failed: {}", err);
        "Invalid session"
    })
}

impl RequireSession {
    /// 从请求扩展中取出会话
    pub fn extract_session(req: &HttpRequest) -> Option<SessionContext> {
        req.extensions().get::<SessionContext>().cloned()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();

        Box::pin(async move {
            match resolve_session(req.request()) {
                Ok(session) => {
                    debug!(
                        "Session accepted for user {} ({})",
                        session.user_id, session.role
                    );
                    req.extensions_mut().insert(session);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(reason) => {
                    debug!("{} for {}, redirecting to login", reason, req.path());
                    Ok(req.into_response(see_other(LOGIN_PATH).map_into_right_body()))
                }
            }
        })
    }
}
