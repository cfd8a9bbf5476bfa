//! 사용자 관리 서비스
//!
//! 회원가입부터 비밀번호 리셋까지 사용자 계정 생명주기를 조율합니다.

pub mod user_service;

pub use user_service::{LoginOutcome, UserService};
