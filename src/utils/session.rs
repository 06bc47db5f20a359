//! 会话令牌
//!
//! 登录成功后签发 HS256 令牌并写入 HttpOnly cookie，令牌不设过期时间。

use crate::config::AppConfig;
use crate::models::auth::entities::SessionContext;
use crate::models::users::entities::{User, UserRole};
use actix_web::HttpRequest;
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// 会话 Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // 用户 ID
    pub name: String,
    pub role: UserRole,
    pub email: String,
    pub iat: usize, // 签发时间
}

impl SessionClaims {
    pub fn into_context(self) -> Result<SessionContext, jsonwebtoken::errors::Error> {
        let user_id = self
            .sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject)?;
        Ok(SessionContext {
            user_id,
            name: self.name,
            role: self.role,
            email: self.email,
        })
    }
}

pub struct SessionUtils;

impl SessionUtils {
    fn get_secret() -> String {
        AppConfig::get().session.secret.clone()
    }

    fn cookie_name() -> &'static str {
        &AppConfig::get().session.cookie_name
    }

    /// 为用户签发会话令牌
    pub fn issue_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = SessionClaims {
            sub: user.id.to_string(),
            name: user.name.clone(),
            role: user.role,
            email: user.email.clone(),
            iat: chrono::Utc::now().timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
    }

    /// 校验签名并还原会话身份
    pub fn verify_token(token: &str) -> Result<SessionContext, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        // 会话不过期
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<SessionClaims>(token, &decoding_key, &validation)?
            .claims
            .into_context()
    }

    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(Self::cookie_name().to_string(), token.to_string())
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 清除会话 cookie（用于登出）
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        let mut cookie = Cookie::build(Self::cookie_name().to_string(), "")
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(config.is_production())
            .finish();
        cookie.make_removal();
        cookie
    }

    pub fn extract_token_from_cookie(req: &HttpRequest) -> Option<String> {
        req.cookie(Self::cookie_name())
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: 42,
            name: "Ali Hassan".into(),
            email: "teacher@ssss.com".into(),
            password_hash: String::new(),
            role,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip_keeps_identity() {
        let token = SessionUtils::issue_token(&user(UserRole::Teacher)).unwrap();
        let ctx = SessionUtils::verify_token(&token).unwrap();
        assert_eq!(ctx.user_id, 42);
        assert_eq!(ctx.role, UserRole::Teacher);
        assert_eq!(ctx.email, "teacher@ssss.com");
        assert_eq!(ctx.name, "Ali Hassan");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let token = SessionUtils::issue_token(&user(UserRole::Student)).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(SessionUtils::verify_token(&tampered).is_err());
        assert!(SessionUtils::verify_token("not-a-token").is_err());
    }

    #[test]
    fn test_removal_cookie_expires() {
        let cookie = SessionUtils::create_empty_session_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(
            cookie.max_age(),
            Some(actix_web::cookie::time::Duration::ZERO)
        );
    }
}
