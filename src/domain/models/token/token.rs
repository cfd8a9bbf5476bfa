//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임과 애플리케이션 특화 클레임을 정의합니다.

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 토큰은 서버 측 세션 상태 없이 자기완결적(self-contained)이며,
/// 유효성은 전적으로 토큰 내용과 현재 시각으로부터 계산됩니다.
/// HS512 서명이 전체 클레임 집합을 묶으므로 어떤 클레임이든
/// 한 비트만 변조되어도 검증이 실패합니다.
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 이메일)
/// - `user_id`: 숫자 사용자 ID
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 토큰의 주체 (사용자 이메일)
    pub sub: String,
    /// 숫자 사용자 ID
    pub user_id: i64,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
