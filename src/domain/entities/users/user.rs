//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 도메인 계층에서 이메일은 항상 평문으로 다루며,
//! 암호화는 영속성 계층(리포지토리)이 경계에서 수행합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
///
/// ## 불변 조건
///
/// - `id`는 생성 시 시퀀스에서 발급되며 이후 변경되지 않습니다
/// - `credit`는 커밋된 어떤 연산 이후에도 `>= 0`입니다
/// - `created_at`은 생성 시점에 고정됩니다
/// - 사용자는 물리적으로 삭제되지 않습니다
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 숫자 ID (생성 시 발급, 불변)
    pub id: i64,
    /// 사용자 이메일 (도메인 계층에서는 평문, 저장 시 암호화됨)
    pub email: String,
    /// bcrypt 해시된 비밀번호 (salt와 cost가 내장된 60자 포맷)
    pub password_hash: String,
    /// 크레딧 잔액 (항상 0 이상)
    pub credit: i64,
    /// 이메일 인증 완료 여부
    pub is_confirmed: bool,
    /// 일회성 이메일 인증 토큰 (인증 완료 시 소거)
    pub confirmation_token: Option<String>,
    /// 생성 시간 (불변)
    pub created_at: DateTime,
}

/// 신규 사용자 생성 데이터
///
/// ID와 생성 시간은 리포지토리가 삽입 시점에 부여하므로
/// 서비스 계층은 이 구조체만 구성합니다.
/// 신규 계정은 항상 크레딧 0, 미인증 상태로 시작합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub confirmation_token: String,
}

impl User {
    /// 비밀번호 인증이 가능한 상태인지 확인
    pub fn can_authenticate(&self) -> bool {
        self.is_confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_authenticate_tracks_confirmation() {
        let mut user = User {
            id: 1,
            email: "a@b.com".to_string(),
            password_hash: "hash".to_string(),
            credit: 0,
            is_confirmed: false,
            confirmation_token: Some("token".to_string()),
            created_at: DateTime::now(),
        };
        assert!(!user.can_authenticate());

        user.is_confirmed = true;
        assert!(user.can_authenticate());
    }
}
