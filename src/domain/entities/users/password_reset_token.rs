//! Password Reset Token Entity
//!
//! 비밀번호 리셋 토큰 엔티티입니다. 평문 토큰 값은 절대 저장되지 않으며,
//! SHA-256 다이제스트만 영속화됩니다. 사용자에 대한 약한 역참조만 가지며
//! (조회용), 사용자 엔티티는 자신의 토큰을 알지 못합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 비밀번호 리셋 토큰
///
/// 생성 후 15분간 유효하며, 성공적인 소비 또는 만료 감지 시 삭제됩니다.
/// 같은 사용자에 대해 동시에 유효한 토큰이 여러 개 존재할 수 있지만,
/// 각 토큰은 독립적으로 단 한 번만 사용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetToken {
    /// 숫자 ID
    pub id: i64,
    /// 평문 토큰 값의 SHA-256 hex 다이제스트 (unique)
    pub token_hash: String,
    /// 소유 사용자에 대한 역참조
    pub user_id: i64,
    /// 만료 시각 (생성 + 15분)
    pub expires_at: DateTime,
}

impl PasswordResetToken {
    /// 토큰이 만료되었는지 확인
    pub fn is_expired(&self) -> bool {
        self.expires_at < DateTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_check() {
        let expired = PasswordResetToken {
            id: 1,
            token_hash: "abc".to_string(),
            user_id: 7,
            expires_at: DateTime::from_millis(DateTime::now().timestamp_millis() - 1_000),
        };
        assert!(expired.is_expired());

        let valid = PasswordResetToken {
            expires_at: DateTime::from_millis(DateTime::now().timestamp_millis() + 60_000),
            ..expired
        };
        assert!(!valid.is_expired());
    }
}
