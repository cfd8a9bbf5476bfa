//! 영속화되지 않는 내부 도메인 모델

pub mod auth;
pub mod token;
