//! 암호화 프리미티브 서비스
//!
//! 개인정보 저장 암호화(AES-256-GCM)와 비밀번호/토큰 해싱(bcrypt,
//! SHA-256)을 담당합니다. 서비스 계층의 다른 모듈은 이 모듈을 통해서만
//! 암호화 연산에 접근합니다.

pub mod encryption_service;
pub mod password_service;

pub use encryption_service::EncryptionService;
pub use password_service::PasswordService;
