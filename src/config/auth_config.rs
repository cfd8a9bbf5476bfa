//! # Authentication Configuration Module
//!
//! JWT 토큰 서명과 이메일 필드 암호화에 필요한 키 자료를 관리하는 모듈입니다.
//! Spring Security의 `jwt.secret`, `encryption.key` 프로퍼티와 동일한 역할을
//! 수행하며, 모든 값은 프로세스 시작 시 한 번 로드되고 이후 불변입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRES_IN="1h"    # 접미사 s(초), m(분), h(시간)
//! export ENCRYPTION_KEY="32-byte-key-for-aes-256-gcm!!!!"
//! ```

use std::env;

use chrono::Duration;

use crate::errors::AppError;

/// JWT 토큰 설정
///
/// HMAC 서명 키와 토큰 수명을 보관합니다.
/// 수명은 `"3600s"`, `"60m"`, `"1h"` 형태의 문자열로 지정하며,
/// 형식이 잘못되면 시작 단계에서 `ConfigurationError`로 실패합니다.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA512 서명에 사용되는 대칭 키
    pub secret: String,
    /// 발급되는 토큰의 수명
    pub ttl: Duration,
}

impl JwtConfig {
    /// 환경 변수에서 JWT 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - `JWT_SECRET` 누락 또는
    ///   `JWT_EXPIRES_IN` 형식 오류
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var("JWT_SECRET").map_err(|_| {
            AppError::ConfigurationError("JWT_SECRET must be set".to_string())
        })?;

        let expires_in =
            env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "1h".to_string());
        let ttl = parse_ttl(&expires_in)?;

        Ok(Self { secret, ttl })
    }

    /// 주어진 값으로 설정을 생성합니다. 테스트용.
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }
}

/// `"3600s"` / `"60m"` / `"1h"` 형태의 수명 문자열을 파싱합니다.
///
/// 단위 접미사가 없거나, 숫자 부분이 비어 있거나, 값이 0 이하이면
/// `ConfigurationError`를 반환합니다. 마지막 문자가 멀티바이트여도
/// 패닉하지 않고 문자 경계 기준으로 분리합니다.
pub fn parse_ttl(expires_in: &str) -> Result<Duration, AppError> {
    let trimmed = expires_in.trim();

    // 바이트 인덱스 분리는 멀티바이트 접미사에서 패닉하므로 문자 기준으로 자릅니다
    let Some((unit_index, unit)) = trimmed.char_indices().last() else {
        return Err(AppError::ConfigurationError(format!(
            "잘못된 JWT_EXPIRES_IN 값: '{}'",
            expires_in
        )));
    };

    let value_part = &trimmed[..unit_index];
    let value: i64 = value_part.parse().map_err(|_| {
        AppError::ConfigurationError(format!(
            "잘못된 JWT_EXPIRES_IN 숫자: '{}'",
            expires_in
        ))
    })?;

    if value <= 0 {
        return Err(AppError::ConfigurationError(format!(
            "JWT_EXPIRES_IN은 양수여야 합니다: '{}'",
            expires_in
        )));
    }

    match unit {
        's' | 'S' => Ok(Duration::seconds(value)),
        'm' | 'M' => Ok(Duration::minutes(value)),
        'h' | 'H' => Ok(Duration::hours(value)),
        _ => Err(AppError::ConfigurationError(format!(
            "잘못된 JWT_EXPIRES_IN 단위 '{}': s/m/h 중 하나여야 합니다",
            unit
        ))),
    }
}

/// 이메일 필드 암호화 설정
///
/// AES-256-GCM 키는 정확히 32바이트여야 하며, 다른 길이는
/// 시작 단계의 치명적 설정 오류입니다.
#[derive(Clone)]
pub struct EncryptionConfig {
    /// AES-256 대칭 키 (32바이트)
    pub key: Vec<u8>,
}

impl EncryptionConfig {
    /// 환경 변수 `ENCRYPTION_KEY`에서 암호화 키를 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 키 누락 또는 32바이트가 아닌 경우
    pub fn from_env() -> Result<Self, AppError> {
        let key_string = env::var("ENCRYPTION_KEY").map_err(|_| {
            AppError::ConfigurationError("ENCRYPTION_KEY must be set".to_string())
        })?;

        let key = key_string.into_bytes();
        if key.len() != 32 {
            return Err(AppError::ConfigurationError(format!(
                "ENCRYPTION_KEY must be exactly 32 bytes for AES-256, got {}",
                key.len()
            )));
        }

        Ok(Self { key })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ttl_seconds() {
        assert_eq!(parse_ttl("3600s").unwrap(), Duration::seconds(3600));
    }

    #[test]
    fn test_parse_ttl_minutes() {
        assert_eq!(parse_ttl("60m").unwrap(), Duration::minutes(60));
    }

    #[test]
    fn test_parse_ttl_hours() {
        assert_eq!(parse_ttl("1h").unwrap(), Duration::hours(1));
    }

    #[test]
    fn test_parse_ttl_uppercase_unit() {
        assert_eq!(parse_ttl("2H").unwrap(), Duration::hours(2));
    }

    #[test]
    fn test_parse_ttl_rejects_multibyte_unit_without_panic() {
        // 멀티바이트 접미사는 패닉이 아니라 설정 오류로 처리됩니다
        assert!(matches!(
            parse_ttl("1시"),
            Err(AppError::ConfigurationError(_))
        ));
        assert!(parse_ttl("시").is_err());
        assert!(parse_ttl("１h").is_err());
    }

    #[test]
    fn test_parse_ttl_rejects_unknown_unit() {
        assert!(matches!(
            parse_ttl("7d"),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_parse_ttl_rejects_missing_number() {
        assert!(parse_ttl("h").is_err());
        assert!(parse_ttl("").is_err());
    }

    #[test]
    fn test_parse_ttl_rejects_garbage() {
        assert!(parse_ttl("abch").is_err());
        assert!(parse_ttl("1 hour").is_err());
    }

    #[test]
    fn test_parse_ttl_rejects_non_positive() {
        assert!(parse_ttl("0s").is_err());
        assert!(parse_ttl("-5m").is_err());
    }
}
