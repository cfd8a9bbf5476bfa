//! # 비밀번호/토큰 해싱 서비스 구현
//!
//! 목적이 다른 두 개의 독립적인 해싱 경로를 제공합니다.
//!
//! - **비밀번호 경로**: bcrypt (cost 12). 느리고 솔트가 자동 내장되는
//!   적응형 해시로, 무차별 대입 공격을 방어합니다.
//! - **불투명 토큰 경로**: SHA-256 hex 다이제스트. 빠르고 결정적이어서
//!   리셋 토큰의 평문을 저장하지 않고 다이제스트로 조회할 수 있습니다.
//!
//! 두 경로는 절대 혼용되지 않습니다. 비밀번호 해시를 토큰 경로로
//! 비교하거나 그 반대로 사용해서는 안 됩니다.

use sha2::{Digest, Sha256};

use crate::errors::AppError;

/// bcrypt cost 파라미터 (설계 문서에 따라 12로 고정)
const BCRYPT_COST: u32 = 12;

/// 비밀번호 및 불투명 토큰 해싱 서비스
///
/// 요청 범위 상태가 없는 순수 컴포넌트입니다.
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// 평문 비밀번호를 bcrypt로 해싱합니다.
    ///
    /// 결과는 솔트와 cost가 내장된 60자 고정 포맷입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - bcrypt 내부 오류 (사실상 발생하지 않음)
    pub fn hash_password(&self, plain_password: &str) -> Result<String, AppError> {
        bcrypt::hash(plain_password, BCRYPT_COST)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 평문 비밀번호를 저장된 해시와 대조합니다.
    ///
    /// 해시 포맷이 손상된 경우를 포함해 어떤 실패에서도 에러를 던지지 않고
    /// `false`를 반환합니다. 호출자는 불일치 원인을 구분할 수 없습니다.
    pub fn verify_password(&self, plain_password: &str, hashed_password: &str) -> bool {
        bcrypt::verify(plain_password, hashed_password).unwrap_or(false)
    }

    /// 불투명 토큰의 SHA-256 hex 다이제스트를 계산합니다.
    ///
    /// 결정적 해시이므로 같은 입력은 항상 같은 다이제스트를 생성하며,
    /// 저장된 다이제스트로 평문 토큰을 조회할 수 있습니다.
    pub fn hash_token(&self, plain_token: &str) -> String {
        let digest = Sha256::digest(plain_token.as_bytes());
        hex::encode(digest)
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let service = PasswordService::new();
        let hash = service.hash_password("Password123!").unwrap();

        assert!(service.verify_password("Password123!", &hash));
        assert!(!service.verify_password("WrongPassword1", &hash));
    }

    #[test]
    fn test_password_hash_embeds_salt() {
        let service = PasswordService::new();
        let first = service.hash_password("Password123!").unwrap();
        let second = service.hash_password("Password123!").unwrap();

        // 솔트가 매번 새로 생성되므로 해시 문자열이 다릅니다
        assert_ne!(first, second);
        assert!(service.verify_password("Password123!", &first));
        assert!(service.verify_password("Password123!", &second));
    }

    #[test]
    fn test_password_hash_format() {
        let service = PasswordService::new();
        let hash = service.hash_password("Password123!").unwrap();

        // bcrypt 해시는 60자이며 cost 12가 내장됩니다
        assert_eq!(hash.len(), 60);
        assert!(hash.starts_with("$2"));
        assert!(hash.contains("$12$"));
    }

    #[test]
    fn test_verify_never_errors_on_malformed_hash() {
        let service = PasswordService::new();

        assert!(!service.verify_password("Password123!", ""));
        assert!(!service.verify_password("Password123!", "not-a-bcrypt-hash"));
    }

    #[test]
    fn test_token_hash_is_deterministic() {
        let service = PasswordService::new();

        let first = service.hash_token("some-opaque-token");
        let second = service.hash_token("some-opaque-token");
        assert_eq!(first, second);
        assert_ne!(first, service.hash_token("other-token"));
    }

    #[test]
    fn test_token_hash_is_hex_sha256() {
        let service = PasswordService::new();
        let digest = service.hash_token("abc");

        // SHA-256 hex는 64자입니다 (알려진 테스트 벡터)
        assert_eq!(digest.len(), 64);
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_paths_are_not_interchangeable() {
        let service = PasswordService::new();

        // 토큰 다이제스트는 bcrypt 경로로 검증되지 않습니다
        let token_digest = service.hash_token("Password123!");
        assert!(!service.verify_password("Password123!", &token_digest));
    }
}
