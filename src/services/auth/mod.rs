//! 인증 토큰 서비스
//!
//! JWT 베어러 토큰의 발급/검증과 단일 사용 비밀번호 리셋 토큰의
//! 생명주기를 담당합니다.

pub mod reset_token_service;
pub mod token_service;

pub use reset_token_service::ResetTokenService;
pub use token_service::TokenService;
