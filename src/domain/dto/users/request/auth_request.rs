//! 인증 관련 요청 DTO
//!
//! 회원가입, 로그인, 이메일 인증, 비밀번호 리셋 요청의
//! HTTP 입력 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 이메일 인증 쿼리 파라미터 (`GET /auth/confirm-email?token=...`)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmEmailQuery {
    pub token: String,
}

/// 비밀번호 리셋 요청 DTO (`POST /auth/request-password-reset`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PasswordResetRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

/// 비밀번호 리셋 실행 DTO (`POST /auth/reset-password`)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// 이메일로 전달된 평문 리셋 토큰
    #[validate(length(min = 1, message = "리셋 토큰이 필요합니다"))]
    pub token: String,

    /// 새 비밀번호
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub new_password: String,
}

/// 비밀번호 강도 검증 (대문자, 소문자, 숫자 각 1자 이상)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_upper || !has_lower || !has_digit {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 모두 포함해야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "Password123!".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "Password123!".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_weak_password() {
        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "alllowercase1".to_string(),
        };
        assert!(request.validate().is_err());

        let request = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "Short1".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
