//! # 크레딧 원장 서비스 구현
//!
//! 사용자별 정수 크레딧 잔액의 단일 소유자입니다.
//! 회로 생성 서비스(차감), 결제 서비스(충전), 직접 조회의
//! 세 독립 호출자가 공유하며, 모든 변경은 사용자 단위로 원자적입니다.
//!
//! ## 원자성
//!
//! 감소 연산의 읽기-확인-쓰기는 리포지토리의 조건부 갱신 한 문장으로
//! 수행됩니다. 잔액 1에 대해 동시에 들어온 두 건의 1 차감은 정확히
//! 한 건만 성공하고, 나머지 한 건은 차감 이후 잔액 기준으로
//! `InsufficientCredit`을 관찰합니다. 어떤 코드 경로에서도 잔액은
//! 음수가 되지 않습니다.

use std::sync::Arc;

use crate::errors::AppError;
use crate::repositories::users::{DecrementOutcome, UserRepository};

/// 크레딧 원장 서비스
pub struct CreditService {
    user_repo: Arc<dyn UserRepository>,
}

impl CreditService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 현재 잔액을 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 해당 사용자 없음
    pub async fn get_balance(&self, user_id: i64) -> Result<i64, AppError> {
        self.user_repo
            .get_credit(user_id)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    /// 크레딧을 증가시키고 새 잔액을 반환합니다.
    ///
    /// 금액의 양수 검증은 DTO 경계에서 끝났다고 가정하지만,
    /// 방어적으로 한 번 더 확인합니다. 상한은 없습니다.
    pub async fn increment(&self, user_id: i64, amount: i64) -> Result<i64, AppError> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "금액은 양의 정수여야 합니다".to_string(),
            ));
        }

        let new_balance = self
            .user_repo
            .increment_credit(user_id, amount)
            .await?
            .ok_or(AppError::UserNotFound)?;

        log::info!(
            "사용자 {} 크레딧 {} 증가, 새 잔액: {}",
            user_id,
            amount,
            new_balance
        );
        Ok(new_balance)
    }

    /// 잔액이 충분한 경우에만 크레딧을 감소시키고 새 잔액을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 해당 사용자 없음
    /// * `AppError::InsufficientCredit` - 잔액 부족 (상태 변경 없음)
    pub async fn decrement(&self, user_id: i64, amount: i64) -> Result<i64, AppError> {
        if amount <= 0 {
            return Err(AppError::ValidationError(
                "금액은 양의 정수여야 합니다".to_string(),
            ));
        }

        match self.user_repo.decrement_credit(user_id, amount).await? {
            DecrementOutcome::Applied(new_balance) => {
                log::info!(
                    "사용자 {} 크레딧 {} 감소, 새 잔액: {}",
                    user_id,
                    amount,
                    new_balance
                );
                Ok(new_balance)
            }
            DecrementOutcome::Insufficient => {
                log::warn!("사용자 {} 크레딧 부족으로 {} 차감 거부", user_id, amount);
                Err(AppError::InsufficientCredit)
            }
            DecrementOutcome::NotFound => Err(AppError::UserNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::NewUser;
    use crate::repositories::users::InMemoryUserRepository;

    async fn service_with_user() -> (CreditService, i64) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(NewUser {
                email: "a@b.com".to_string(),
                password_hash: "hash".to_string(),
                confirmation_token: "token".to_string(),
            })
            .await
            .unwrap();

        (CreditService::new(repo), user.id)
    }

    #[actix_web::test]
    async fn test_initial_balance_is_zero() {
        let (service, user_id) = service_with_user().await;
        assert_eq!(service.get_balance(user_id).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        let (service, _) = service_with_user().await;

        assert!(matches!(
            service.get_balance(999).await,
            Err(AppError::UserNotFound)
        ));
        assert!(matches!(
            service.increment(999, 10).await,
            Err(AppError::UserNotFound)
        ));
        assert!(matches!(
            service.decrement(999, 10).await,
            Err(AppError::UserNotFound)
        ));
    }

    #[actix_web::test]
    async fn test_increment_then_decrement() {
        let (service, user_id) = service_with_user().await;

        assert_eq!(service.increment(user_id, 10).await.unwrap(), 10);
        assert_eq!(service.decrement(user_id, 4).await.unwrap(), 6);
        assert_eq!(service.get_balance(user_id).await.unwrap(), 6);
    }

    #[actix_web::test]
    async fn test_underflow_is_rejected_without_mutation() {
        let (service, user_id) = service_with_user().await;
        service.increment(user_id, 10).await.unwrap();

        assert!(matches!(
            service.decrement(user_id, 15).await,
            Err(AppError::InsufficientCredit)
        ));
        // 실패한 차감은 잔액을 바꾸지 않습니다
        assert_eq!(service.get_balance(user_id).await.unwrap(), 10);
    }

    #[actix_web::test]
    async fn test_non_positive_amounts_are_rejected() {
        let (service, user_id) = service_with_user().await;

        assert!(service.increment(user_id, 0).await.is_err());
        assert!(service.increment(user_id, -3).await.is_err());
        assert!(service.decrement(user_id, 0).await.is_err());
        assert!(service.decrement(user_id, -3).await.is_err());
    }

    #[actix_web::test]
    async fn test_concurrent_decrements_yield_exactly_one_success() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(NewUser {
                email: "a@b.com".to_string(),
                password_hash: "hash".to_string(),
                confirmation_token: "token".to_string(),
            })
            .await
            .unwrap();
        repo.increment_credit(user.id, 1).await.unwrap();

        let service = Arc::new(CreditService::new(repo));

        // 잔액 1에 대한 두 건의 동시 1 차감
        let first = service.decrement(user.id, 1);
        let second = service.decrement(user.id, 1);
        let (first, second) = futures_util::future::join(first, second).await;

        let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "정확히 한 건만 성공해야 합니다");

        let failure = if first.is_err() { first } else { second };
        assert!(matches!(failure, Err(AppError::InsufficientCredit)));
        assert_eq!(service.get_balance(user.id).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_many_concurrent_decrements_never_go_negative() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = repo
            .insert(NewUser {
                email: "a@b.com".to_string(),
                password_hash: "hash".to_string(),
                confirmation_token: "token".to_string(),
            })
            .await
            .unwrap();
        repo.increment_credit(user.id, 5).await.unwrap();

        let service = Arc::new(CreditService::new(repo));

        let futures: Vec<_> = (0..10).map(|_| service.decrement(user.id, 1)).collect();
        let results = futures_util::future::join_all(futures).await;

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 5);
        assert_eq!(service.get_balance(user.id).await.unwrap(), 0);
    }
}
