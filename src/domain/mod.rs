//! # Domain Module
//!
//! 도메인 엔티티, 전송 객체(DTO), 내부 모델을 정의하는 모듈입니다.
//!
//! - [`entities`] - 영속화되는 핵심 도메인 엔티티 (User, PasswordResetToken)
//! - [`models`] - 영속화되지 않는 내부 모델 (토큰 클레임, 인증된 사용자)
//! - [`dto`] - HTTP 요청/응답 전송 객체

pub mod dto;
pub mod entities;
pub mod models;
