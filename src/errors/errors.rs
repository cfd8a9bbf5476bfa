//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 관리 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 원칙
//!
//! - 암호화/조회 실패는 코어 경계에서 도메인 에러로 변환되며,
//!   원시 예외가 핸들러 밖으로 전파되지 않습니다
//! - `ConfigurationError`만이 프로세스 시작을 중단시킬 수 있습니다
//! - 인증 실패는 "이메일 없음"과 "비밀번호 틀림"을 구분하지 않고
//!   동일한 외부 메시지로 응답합니다 (계정 열거 방지)
//! - 리셋 토큰의 NotFound/Expired는 내부적으로만 구분되며,
//!   외부 응답 메시지는 통일됩니다
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn confirm_account(&self, token: &str) -> Result<(), AppError> {
//!     let user = self.user_repo.find_by_confirmation_token(token).await?
//!         .ok_or(AppError::UserNotFound)?;
//!     // ...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 설정 오류 (프로세스 시작 단계에서만 발생, fatal)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 잘못된 인증 정보 (401 Unauthorized)
    ///
    /// 이메일 없음/비밀번호 틀림 모두 이 에러로 통일됩니다.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// 이메일 미인증 계정의 로그인 시도 (401 Unauthorized)
    #[error("Account not confirmed")]
    AccountNotConfirmed,

    /// JWT 토큰 만료 (401 Unauthorized)
    #[error("Token expired")]
    TokenExpired,

    /// JWT 토큰 서명/구조 오류 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    TokenInvalid(String),

    /// 암호문 복호화 실패 - 변조, 잘못된 키, 절단 (500 Internal Server Error)
    #[error("Decryption failed")]
    DecryptionFailed,

    /// 크레딧 잔액 부족 (400 Bad Request, 구분된 메시지)
    #[error("Insufficient credit")]
    InsufficientCredit,

    /// 사용자 없음 (404 Not Found)
    #[error("User not found")]
    UserNotFound,

    /// 리셋 토큰 없음 (400 Bad Request, 외부 메시지는 Expired와 통일)
    #[error("Password reset token not found")]
    ResetTokenNotFound,

    /// 리셋 토큰 만료 (400 Bad Request, 외부 메시지는 NotFound와 통일)
    #[error("Password reset token expired")]
    ResetTokenExpired,

    /// 이메일 중복 (409 Conflict)
    #[error("Email already in use")]
    DuplicateEmail,

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출되는 에러 메시지
    ///
    /// 내부 구분(리셋 토큰 NotFound/Expired, 인증 실패 원인)을 외부에
    /// 드러내지 않도록 일부 변형은 통일된 메시지를 반환합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => "Invalid credentials.".to_string(),
            AppError::AccountNotConfirmed => {
                "Account not confirmed. Please check your email.".to_string()
            }
            AppError::TokenExpired | AppError::TokenInvalid(_) => {
                "Invalid or expired authentication token.".to_string()
            }
            AppError::ResetTokenNotFound | AppError::ResetTokenExpired => {
                "Invalid or expired password reset token.".to_string()
            }
            AppError::InsufficientCredit => {
                "Insufficient credit to perform this operation.".to_string()
            }
            AppError::UserNotFound => "User not found.".to_string(),
            AppError::DuplicateEmail => "Email is already in use.".to_string(),
            AppError::ValidationError(msg) => msg.clone(),
            // 내부 오류의 상세 내용은 로그에만 남깁니다
            AppError::DatabaseError(_)
            | AppError::DecryptionFailed
            | AppError::ConfigurationError(_)
            | AppError::InternalError(_) => "Internal server error.".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_)
            | AppError::InsufficientCredit
            | AppError::ResetTokenNotFound
            | AppError::ResetTokenExpired => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::AccountNotConfirmed
            | AppError::TokenExpired
            | AppError::TokenInvalid(_) => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log::error!("내부 에러 발생: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_user_not_found_response() {
        let error = AppError::UserNotFound;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_credentials_response() {
        let error = AppError::InvalidCredentials;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_token_errors_are_unauthorized() {
        for error in [
            AppError::TokenExpired,
            AppError::TokenInvalid("bad signature".to_string()),
        ] {
            let response = error.error_response();
            assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_insufficient_credit_is_bad_request() {
        let error = AppError::InsufficientCredit;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let error = AppError::DuplicateEmail;
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_reset_token_messages_are_unified() {
        // 외부 메시지로 NotFound와 Expired를 구분할 수 없어야 합니다
        assert_eq!(
            AppError::ResetTokenNotFound.public_message(),
            AppError::ResetTokenExpired.public_message()
        );
    }

    #[test]
    fn test_decryption_failure_hides_detail() {
        let error = AppError::DecryptionFailed;
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(error.public_message(), "Internal server error.");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
