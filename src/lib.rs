//! 사용자 서비스 백엔드
//!
//! Rust 기반의 사용자 계정 및 크레딧 관리 서비스입니다.
//! JWT 토큰 기반 인증, 개인정보 저장 암호화(AES-256-GCM),
//! 그리고 원자적 크레딧 원장을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 이메일 인증, 비밀번호 리셋
//! - **JWT 인증**: HS512 베어러 토큰 기반 상태 없는 인증
//! - **개인정보 보호**: 이메일 저장 암호화 (AES-256-GCM)
//! - **크레딧 원장**: 원자적 충전/차감, 음수 잔액 불가
//! - **명시적 DI**: 생성자 주입으로 조립되는 서비스 그래프
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::services::users::UserService;
//!
//! // 서비스는 생성자 주입으로 조립됩니다
//! let user_service = UserService::new(
//!     user_repo,
//!     hasher,
//!     token_service,
//!     reset_token_service,
//!     mailer,
//! );
//!
//! // 회원가입 및 로그인
//! let user = user_service.register("user@example.com", "Password123").await?;
//! let outcome = user_service.login("user@example.com", "Password123").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
