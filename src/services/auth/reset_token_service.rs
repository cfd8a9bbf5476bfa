//! # 비밀번호 리셋 토큰 서비스 구현
//!
//! 단일 사용, 시간 제한이 있는 비밀번호 리셋 토큰을 관리합니다.
//! 평문 토큰은 생성 시 딱 한 번 반환되며 (이메일 전달용),
//! 저장소에는 SHA-256 다이제스트만 영속화됩니다.

use std::sync::Arc;

use mongodb::bson::DateTime;
use uuid::Uuid;

use crate::errors::AppError;
use crate::repositories::tokens::ResetTokenRepository;
use crate::services::crypto::PasswordService;

/// 리셋 토큰 유효 시간 (분)
const RESET_TOKEN_TTL_MINUTES: i64 = 15;

/// 비밀번호 리셋 토큰 서비스
///
/// ## 단일 사용 보장
///
/// `consume`은 리포지토리의 원자적 lookup-and-delete 위에서 동작하므로
/// 같은 토큰에 대한 두 번째 소비는 (동시 요청이라도) 반드시
/// `ResetTokenNotFound`를 관찰합니다.
///
/// ## 동시 유효 토큰
///
/// 리셋을 여러 번 요청하면 같은 사용자에 대해 동시에 유효한 토큰이
/// 여러 개 존재할 수 있습니다. 기존 토큰을 무효화하지 않는 이 동작은
/// 원 설계를 그대로 따른 것이며, 각 토큰은 독립적으로 한 번만 쓰입니다.
pub struct ResetTokenService {
    token_repo: Arc<dyn ResetTokenRepository>,
    hasher: Arc<PasswordService>,
}

impl ResetTokenService {
    pub fn new(token_repo: Arc<dyn ResetTokenRepository>, hasher: Arc<PasswordService>) -> Self {
        Self { token_repo, hasher }
    }

    /// 새 리셋 토큰을 생성하고 평문 값을 반환합니다.
    ///
    /// 암호학적으로 안전한 랜덤 값(UUID v4)을 생성해 다이제스트와
    /// 만료 시각(지금 + 15분)만 저장합니다. 평문은 이 반환값 이후
    /// 어디에도 남지 않으므로 호출자가 일회성 전달(이메일)을 책임집니다.
    pub async fn create(&self, user_id: i64) -> Result<String, AppError> {
        let plain_token = Uuid::new_v4().to_string();
        let token_hash = self.hasher.hash_token(&plain_token);
        let expires_at = DateTime::from_millis(
            DateTime::now().timestamp_millis() + RESET_TOKEN_TTL_MINUTES * 60 * 1000,
        );

        self.token_repo
            .insert(&token_hash, user_id, expires_at)
            .await?;

        log::info!("사용자 {}의 비밀번호 리셋 토큰 생성됨", user_id);
        Ok(plain_token)
    }

    /// 평문 토큰을 제시받아 소비하고 소유 사용자 ID를 반환합니다.
    ///
    /// 찾은 레코드는 만료 여부와 무관하게 즉시 삭제됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ResetTokenNotFound` - 다이제스트에 해당하는 레코드 없음
    ///   (이미 소비된 토큰 포함)
    /// * `AppError::ResetTokenExpired` - 레코드는 있었으나 만료됨
    ///   (레코드는 삭제된 상태)
    pub async fn consume(&self, plain_token: &str) -> Result<i64, AppError> {
        let token_hash = self.hasher.hash_token(plain_token);

        let token = self
            .token_repo
            .take_by_hash(&token_hash)
            .await?
            .ok_or(AppError::ResetTokenNotFound)?;

        if token.is_expired() {
            log::warn!("사용자 {}의 만료된 리셋 토큰 제시됨 (삭제됨)", token.user_id);
            return Err(AppError::ResetTokenExpired);
        }

        Ok(token.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tokens::InMemoryResetTokenRepository;

    fn test_service() -> ResetTokenService {
        ResetTokenService::new(
            Arc::new(InMemoryResetTokenRepository::new()),
            Arc::new(PasswordService::new()),
        )
    }

    #[actix_web::test]
    async fn test_create_and_consume_round_trip() {
        let service = test_service();
        let plain = service.create(42).await.unwrap();

        assert_eq!(service.consume(&plain).await.unwrap(), 42);
    }

    #[actix_web::test]
    async fn test_consume_is_single_use() {
        let service = test_service();
        let plain = service.create(42).await.unwrap();

        assert!(service.consume(&plain).await.is_ok());
        // 두 번째 소비는 NotFound를 관찰합니다
        assert!(matches!(
            service.consume(&plain).await,
            Err(AppError::ResetTokenNotFound)
        ));
    }

    #[actix_web::test]
    async fn test_unknown_token_is_not_found() {
        let service = test_service();
        assert!(matches!(
            service.consume("no-such-token").await,
            Err(AppError::ResetTokenNotFound)
        ));
    }

    #[actix_web::test]
    async fn test_expired_token_is_deleted_and_reported() {
        let repo = Arc::new(InMemoryResetTokenRepository::new());
        let hasher = Arc::new(PasswordService::new());
        let service = ResetTokenService::new(repo.clone(), hasher.clone());

        // 이미 만료된 레코드를 직접 삽입합니다
        let plain = "expired-token-value";
        let digest = hasher.hash_token(plain);
        let past = DateTime::from_millis(DateTime::now().timestamp_millis() - 60_000);
        repo.insert(&digest, 42, past).await.unwrap();

        assert!(matches!(
            service.consume(plain).await,
            Err(AppError::ResetTokenExpired)
        ));
        // 만료 감지 시점에 레코드가 삭제되어 재시도는 NotFound입니다
        assert!(matches!(
            service.consume(plain).await,
            Err(AppError::ResetTokenNotFound)
        ));
    }

    #[actix_web::test]
    async fn test_multiple_valid_tokens_per_user() {
        let service = test_service();
        let first = service.create(42).await.unwrap();
        let second = service.create(42).await.unwrap();

        assert_ne!(first, second);
        // 새 요청이 기존 토큰을 무효화하지 않습니다
        assert_eq!(service.consume(&first).await.unwrap(), 42);
        assert_eq!(service.consume(&second).await.unwrap(), 42);
    }

    #[actix_web::test]
    async fn test_plaintext_never_stored() {
        let repo = Arc::new(InMemoryResetTokenRepository::new());
        let hasher = Arc::new(PasswordService::new());
        let service = ResetTokenService::new(repo.clone(), hasher.clone());

        let plain = service.create(42).await.unwrap();

        // 평문 자체로는 조회되지 않고 다이제스트로만 조회됩니다
        assert!(repo.take_by_hash(&plain).await.unwrap().is_none());
        assert!(
            repo.take_by_hash(&hasher.hash_token(&plain))
                .await
                .unwrap()
                .is_some()
        );
    }
}
