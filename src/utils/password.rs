use crate::config::AppConfig;
use crate::errors::SchoolError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use once_cell::sync::Lazy;

// 邮箱不存在时用于校验的占位哈希，参数与真实账号一致
static PLACEHOLDER_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_password("placeholder-password-never-matches").ok());

/// 哈希密码（Argon2id，参数取自配置）
pub fn hash_password(password: &str) -> Result<String, SchoolError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| SchoolError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SchoolError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码，哈希格式无效时视为不匹配
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

/// 对占位哈希执行一次完整校验，结果恒为 `false`
///
/// 登录时账号不存在也走这一步，使响应耗时与密码错误一致。
pub fn verify_placeholder(password: &str) -> bool {
    if let Some(hash) = PLACEHOLDER_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("teacher123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("teacher123", &hash));
        assert!(!verify_password("teacher124", &hash));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!verify_password("admin", "admin"));
        assert!(!verify_password("", ""));
    }

    #[test]
    fn test_placeholder_verify_never_matches() {
        assert!(PLACEHOLDER_HASH.as_deref().is_some_and(|h| h.starts_with("$argon2id$")));
        assert!(!verify_placeholder("placeholder-password-never-matches"));
        assert!(!verify_placeholder(""));
    }
}
