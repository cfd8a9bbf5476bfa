//! 사용자 관련 응답 DTO
//!
//! 로그인, 회원가입, 크레딧 조회/연산의 HTTP 응답 구조를 정의합니다.
//! 비밀번호 해시 등 민감 정보는 어떤 응답에도 포함되지 않습니다.

use serde::{Deserialize, Serialize};

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 발급된 베어러 토큰
    pub token: String,
    /// 숫자 사용자 ID
    pub user_id: i64,
    /// 사용자 이메일 (복호화된 평문)
    pub email: String,
    /// 현재 크레딧 잔액
    pub credit: i64,
    /// 토큰 타입 (항상 "Bearer")
    pub token_type: String,
}

/// 회원가입 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
    pub message: String,
}

/// 크레딧 조회 응답 (`GET /users/{id}/credit`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreditResponse {
    pub user_id: i64,
    pub credit: i64,
}

/// 크레딧 증감 연산 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditOperationResponse {
    pub user_id: i64,
    /// 연산 이후의 새 잔액
    pub new_credit: i64,
}
