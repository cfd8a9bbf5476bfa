//! 크레딧 원장 서비스
//!
//! 잔액 조회와 원자적 충전/차감 연산을 제공합니다.

pub mod credit_service;

pub use credit_service::CreditService;
