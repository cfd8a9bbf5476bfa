//! # 이메일 전달 모듈
//!
//! 이메일 발송은 이 코어의 범위 밖이며 (외부 협력자),
//! 여기서는 호출 인터페이스만 정의합니다.
//! 기본 구현체는 실제 발송 대신 링크를 로그로 남기므로
//! SMTP 설정 없이 개발/테스트가 가능합니다.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::utils::string_utils::mask_email;

/// 이메일 전달 인터페이스
#[async_trait]
pub trait Mailer: Send + Sync {
    /// 계정 인증 링크를 전달합니다.
    async fn send_confirmation_email(
        &self,
        email: &str,
        confirmation_token: &str,
    ) -> Result<(), AppError>;

    /// 비밀번호 리셋 링크(평문 토큰 포함)를 전달합니다.
    async fn send_password_reset_email(
        &self,
        email: &str,
        plain_token: &str,
    ) -> Result<(), AppError>;
}

/// 로그 기반 Mailer 구현체
///
/// 수신자 주소는 마스킹해 로그에 남기고, 토큰은 전달 자체가 목적이므로
/// 그대로 출력합니다. 운영 환경에서는 실제 발송 구현체로 교체합니다.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_confirmation_email(
        &self,
        email: &str,
        confirmation_token: &str,
    ) -> Result<(), AppError> {
        log::info!(
            "📧 [계정 인증] {} -> /auth/confirm-email?token={}",
            mask_email(email),
            confirmation_token
        );
        Ok(())
    }

    async fn send_password_reset_email(
        &self,
        email: &str,
        plain_token: &str,
    ) -> Result<(), AppError> {
        log::info!(
            "📧 [비밀번호 리셋] {} -> token={}",
            mask_email(email),
            plain_token
        );
        Ok(())
    }
}
