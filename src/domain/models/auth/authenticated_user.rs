//! 인증된 사용자 모델
//!
//! 인증 미들웨어가 토큰 검증 후 Request Extensions에 저장하는 모델입니다.

use serde::{Deserialize, Serialize};

/// 검증된 토큰에서 추출된 인증 사용자 정보
///
/// 핸들러는 이 구조체를 통해 호출자의 신원에 접근합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 숫자 사용자 ID
    pub user_id: i64,
    /// 토큰 주체 (이메일)
    pub email: String,
}
