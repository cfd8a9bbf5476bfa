//! 애플리케이션 핵심 모듈
//!
//! 서비스 조립 결과인 [`AppState`]를 제공합니다.

pub mod state;

pub use state::AppState;
