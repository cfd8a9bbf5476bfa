//! # 리셋 토큰 리포지토리 구현
//!
//! 비밀번호 리셋 토큰의 데이터 액세스 계층입니다.
//! 소비(consume)는 조회와 삭제를 하나의 원자적 연산으로 수행해야 하므로,
//! MongoDB 구현체는 `find_one_and_delete` 한 문장을 사용합니다.
//! 같은 토큰에 대한 두 번째 동시 소비는 반드시 "없음"을 관찰합니다.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{DateTime, doc},
};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::users::PasswordResetToken;
use crate::errors::AppError;

/// 리셋 토큰 컬렉션 이름
const RESET_TOKENS_COLLECTION: &str = "password_reset_tokens";
/// 리셋 토큰 ID 시퀀스 이름
const RESET_TOKENS_SEQUENCE: &str = "password_reset_tokens";

/// 리셋 토큰 데이터 액세스 추상화
#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    /// 새 리셋 토큰 레코드를 저장합니다.
    async fn insert(
        &self,
        token_hash: &str,
        user_id: i64,
        expires_at: DateTime,
    ) -> Result<PasswordResetToken, AppError>;

    /// 다이제스트로 토큰을 찾아 원자적으로 제거한 뒤 반환합니다.
    ///
    /// 만료 여부와 무관하게 찾으면 제거합니다. 만료 판정은 서비스
    /// 계층이 반환된 레코드로 수행합니다 (만료 감지 시에도 레코드는
    /// 이미 삭제된 상태여야 하기 때문입니다).
    async fn take_by_hash(&self, token_hash: &str)
    -> Result<Option<PasswordResetToken>, AppError>;
}

/// MongoDB에 저장되는 리셋 토큰 문서
#[derive(Debug, Serialize, Deserialize)]
struct ResetTokenDocument {
    #[serde(rename = "_id")]
    id: i64,
    token_hash: String,
    user_id: i64,
    expires_at: DateTime,
}

impl From<ResetTokenDocument> for PasswordResetToken {
    fn from(document: ResetTokenDocument) -> Self {
        PasswordResetToken {
            id: document.id,
            token_hash: document.token_hash,
            user_id: document.user_id,
            expires_at: document.expires_at,
        }
    }
}

/// MongoDB 기반 리셋 토큰 리포지토리
pub struct MongoResetTokenRepository {
    db: Arc<Database>,
}

impl MongoResetTokenRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<ResetTokenDocument> {
        self.db
            .get_database()
            .collection::<ResetTokenDocument>(RESET_TOKENS_COLLECTION)
    }
}

#[async_trait]
impl ResetTokenRepository for MongoResetTokenRepository {
    async fn insert(
        &self,
        token_hash: &str,
        user_id: i64,
        expires_at: DateTime,
    ) -> Result<PasswordResetToken, AppError> {
        let id = self.db.next_sequence(RESET_TOKENS_SEQUENCE).await?;

        let document = ResetTokenDocument {
            id,
            token_hash: token_hash.to_string(),
            user_id,
            expires_at,
        };

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(format!("리셋 토큰 삽입 실패: {}", e)))?;

        Ok(document.into())
    }

    async fn take_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, AppError> {
        // 조회-후-삭제 경쟁을 막는 원자적 lookup-and-delete 한 문장
        let document = self
            .collection()
            .find_one_and_delete(doc! { "token_hash": token_hash })
            .await
            .map_err(|e| AppError::DatabaseError(format!("리셋 토큰 소비 실패: {}", e)))?;

        Ok(document.map(Into::into))
    }
}

/// 인메모리 리셋 토큰 리포지토리 (테스트/로컬 개발용)
///
/// 다이제스트를 키로 하는 HashMap이며, 소비는 락 안의 `remove` 한 번으로
/// MongoDB 구현체와 동일한 단일 사용 계약을 만족합니다.
#[derive(Default)]
pub struct InMemoryResetTokenRepository {
    tokens: Mutex<HashMap<String, PasswordResetToken>>,
    sequence: AtomicI64,
}

impl InMemoryResetTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResetTokenRepository for InMemoryResetTokenRepository {
    async fn insert(
        &self,
        token_hash: &str,
        user_id: i64,
        expires_at: DateTime,
    ) -> Result<PasswordResetToken, AppError> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let token = PasswordResetToken {
            id,
            token_hash: token_hash.to_string(),
            user_id,
            expires_at,
        };

        let mut tokens = self.tokens.lock().unwrap();
        tokens.insert(token_hash.to_string(), token.clone());
        Ok(token)
    }

    async fn take_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, AppError> {
        let mut tokens = self.tokens.lock().unwrap();
        Ok(tokens.remove(token_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_take_removes_token() {
        let repo = InMemoryResetTokenRepository::new();
        let expires = DateTime::from_millis(DateTime::now().timestamp_millis() + 60_000);
        repo.insert("digest-1", 7, expires).await.unwrap();

        let taken = repo.take_by_hash("digest-1").await.unwrap().unwrap();
        assert_eq!(taken.user_id, 7);

        // 두 번째 소비는 없음을 관찰합니다
        assert!(repo.take_by_hash("digest-1").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_multiple_tokens_per_user_allowed() {
        let repo = InMemoryResetTokenRepository::new();
        let expires = DateTime::from_millis(DateTime::now().timestamp_millis() + 60_000);
        repo.insert("digest-1", 7, expires).await.unwrap();
        repo.insert("digest-2", 7, expires).await.unwrap();

        // 같은 사용자의 토큰 두 개가 각각 독립적으로 소비됩니다
        assert!(repo.take_by_hash("digest-1").await.unwrap().is_some());
        assert!(repo.take_by_hash("digest-2").await.unwrap().is_some());
    }
}
