//! 인메모리 사용자 리포지토리
//!
//! MongoDB 없이 동작하는 테스트/로컬 개발용 구현체입니다.
//! 크레딧 증감은 단일 락 안에서 읽기-확인-쓰기를 수행하므로
//! MongoDB 구현체와 동일한 원자성 계약을 만족합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use mongodb::bson::DateTime;

use crate::domain::entities::users::{NewUser, User};
use crate::errors::AppError;
use crate::repositories::users::user_repo::{DecrementOutcome, UserRepository};

/// HashMap 기반 사용자 리포지토리
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<i64, User>>,
    sequence: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let user = User {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            credit: 0,
            is_confirmed: false,
            confirmation_token: Some(new_user.confirmation_token),
            created_at: DateTime::now(),
        };

        let mut users = self.users.lock().unwrap();
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_confirmation_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .values()
            .find(|u| u.confirmation_token.as_deref() == Some(token))
            .cloned())
    }

    async fn confirm_account(&self, id: i64) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(&id) {
            user.is_confirmed = true;
            user.confirmation_token = None;
        }
        Ok(())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.get_mut(&id) {
            user.password_hash = password_hash.to_string();
        }
        Ok(())
    }

    async fn get_credit(&self, id: i64) -> Result<Option<i64>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).map(|u| u.credit))
    }

    async fn increment_credit(&self, id: i64, amount: i64) -> Result<Option<i64>, AppError> {
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            user.credit += amount;
            user.credit
        }))
    }

    async fn decrement_credit(&self, id: i64, amount: i64) -> Result<DecrementOutcome, AppError> {
        // 락을 잡은 채로 확인과 감소를 함께 수행합니다
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&id) {
            None => Ok(DecrementOutcome::NotFound),
            Some(user) if user.credit < amount => Ok(DecrementOutcome::Insufficient),
            Some(user) => {
                user.credit -= amount;
                Ok(DecrementOutcome::Applied(user.credit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$12$fakefakefakefakefakefakefakefakefakefakefakefakefakef"
                .to_string(),
            confirmation_token: "confirm-token".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(new_user("a@b.com")).await.unwrap();
        let second = repo.insert(new_user("c@d.com")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.credit, 0);
        assert!(!first.is_confirmed);
    }

    #[actix_web::test]
    async fn test_find_by_email_and_token() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("a@b.com")).await.unwrap();

        assert_eq!(
            repo.find_by_email("a@b.com").await.unwrap().unwrap().id,
            user.id
        );
        assert!(repo.find_by_email("x@y.com").await.unwrap().is_none());
        assert_eq!(
            repo.find_by_confirmation_token("confirm-token")
                .await
                .unwrap()
                .unwrap()
                .id,
            user.id
        );
    }

    #[actix_web::test]
    async fn test_confirm_account_clears_token() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("a@b.com")).await.unwrap();

        repo.confirm_account(user.id).await.unwrap();
        let confirmed = repo.find_by_id(user.id).await.unwrap().unwrap();

        assert!(confirmed.is_confirmed);
        assert!(confirmed.confirmation_token.is_none());
    }

    #[actix_web::test]
    async fn test_decrement_outcomes() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("a@b.com")).await.unwrap();
        repo.increment_credit(user.id, 5).await.unwrap();

        assert_eq!(
            repo.decrement_credit(user.id, 3).await.unwrap(),
            DecrementOutcome::Applied(2)
        );
        assert_eq!(
            repo.decrement_credit(user.id, 3).await.unwrap(),
            DecrementOutcome::Insufficient
        );
        assert_eq!(
            repo.decrement_credit(999, 1).await.unwrap(),
            DecrementOutcome::NotFound
        );
        // 실패한 감소는 잔액을 바꾸지 않습니다
        assert_eq!(repo.get_credit(user.id).await.unwrap(), Some(2));
    }
}
