//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하며, 이메일 필드는 이 계층의 경계에서
//! 암호화/복호화됩니다. 암호화 서비스는 전역 상태가 아니라
//! 생성자 의존성으로 주입됩니다.
//!
//! ## 크레딧 원자성
//!
//! 크레딧 증감은 읽기-확인-쓰기가 아니라 조건 필터를 포함한
//! `find_one_and_update` 한 문장으로 수행됩니다. 잔액 1에 대해
//! 동시에 들어온 두 건의 1 감소 요청은 정확히 한 건만 성공합니다.
//!
//! ## 이메일 조회의 확장성 한계
//!
//! 랜덤 nonce 기반 인증 암호화는 암호문 동등 검색을 불가능하게 하므로,
//! 이메일 조회는 전체 행을 복호화해 비교하는 선형 스캔입니다.
//! 소규모에서는 허용 가능하지만 규모가 커지면 표시용 암호문과 별개인
//! 결정적 키드 해시 인덱스 도입을 검토해야 합니다. 결정적 암호화로의
//! 전환은 기밀성 모델을 바꾸므로 명시적 결정 없이 수행하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, DateTime, doc},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::users::{NewUser, User};
use crate::errors::AppError;
use crate::services::crypto::EncryptionService;

/// 사용자 컬렉션 이름
const USERS_COLLECTION: &str = "users";
/// 사용자 ID 시퀀스 이름
const USERS_SEQUENCE: &str = "users";

/// 조건부 크레딧 감소의 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// 감소 적용됨, 새 잔액 포함
    Applied(i64),
    /// 잔액 부족으로 상태 변경 없음
    Insufficient,
    /// 해당 사용자가 존재하지 않음
    NotFound,
}

/// 사용자 데이터 액세스 추상화
///
/// MongoDB 구현체와 테스트용 인메모리 구현체가 있습니다.
/// 모든 크레딧 변경 연산은 구현체와 무관하게 사용자 단위로 원자적입니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 신규 사용자를 저장하고 발급된 ID가 채워진 엔티티를 반환합니다.
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;

    /// ID로 사용자를 조회합니다.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// 평문 이메일로 사용자를 조회합니다 (복호화-비교 스캔).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 이메일 인증 토큰으로 사용자를 조회합니다.
    async fn find_by_confirmation_token(&self, token: &str) -> Result<Option<User>, AppError>;

    /// 계정을 인증 완료 상태로 전환하고 인증 토큰을 소거합니다.
    async fn confirm_account(&self, id: i64) -> Result<(), AppError>;

    /// 비밀번호 해시를 갱신합니다.
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AppError>;

    /// 현재 크레딧 잔액을 조회합니다.
    async fn get_credit(&self, id: i64) -> Result<Option<i64>, AppError>;

    /// 크레딧을 증가시키고 새 잔액을 반환합니다. 사용자 없으면 None.
    async fn increment_credit(&self, id: i64, amount: i64) -> Result<Option<i64>, AppError>;

    /// 잔액이 충분한 경우에만 크레딧을 감소시킵니다.
    ///
    /// 확인과 감소는 하나의 원자적 연산이어야 합니다.
    async fn decrement_credit(&self, id: i64, amount: i64) -> Result<DecrementOutcome, AppError>;
}

/// MongoDB에 저장되는 사용자 문서
///
/// 도메인 엔티티와 달리 `email` 필드는 암호화된 base64 blob입니다.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: i64,
    /// 암호화된 이메일 (nonce ∥ ciphertext∥tag, base64)
    email: String,
    password_hash: String,
    credit: i64,
    is_confirmed: bool,
    confirmation_token: Option<String>,
    created_at: DateTime,
}

/// MongoDB 기반 사용자 리포지토리
///
/// 이메일 암호화 서비스를 생성자 의존성으로 받아
/// 저장/조회 경계에서 암호화와 복호화를 수행합니다.
pub struct MongoUserRepository {
    db: Arc<Database>,
    cipher: Arc<EncryptionService>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>, cipher: Arc<EncryptionService>) -> Self {
        Self { db, cipher }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.db
            .get_database()
            .collection::<UserDocument>(USERS_COLLECTION)
    }

    /// 저장 문서를 도메인 엔티티로 변환합니다 (이메일 복호화 포함).
    fn to_entity(&self, document: UserDocument) -> Result<User, AppError> {
        let email = self.cipher.decrypt(&document.email)?;
        Ok(User {
            id: document.id,
            email,
            password_hash: document.password_hash,
            credit: document.credit,
            is_confirmed: document.is_confirmed,
            confirmation_token: document.confirmation_token,
            created_at: document.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let id = self.db.next_sequence(USERS_SEQUENCE).await?;
        let created_at = DateTime::now();

        let document = UserDocument {
            id,
            email: self.cipher.encrypt(&new_user.email)?,
            password_hash: new_user.password_hash.clone(),
            credit: 0,
            is_confirmed: false,
            confirmation_token: Some(new_user.confirmation_token.clone()),
            created_at,
        };

        self.collection()
            .insert_one(&document)
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 삽입 실패: {}", e)))?;

        Ok(User {
            id,
            email: new_user.email,
            password_hash: new_user.password_hash,
            credit: 0,
            is_confirmed: false,
            confirmation_token: Some(new_user.confirmation_token),
            created_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 조회 실패: {}", e)))?;

        document.map(|d| self.to_entity(d)).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        // 랜덤 암호화 때문에 동등 검색이 불가능합니다. 전체 스캔 후
        // 행마다 복호화해 비교합니다 (문서화된 확장성 한계).
        let mut cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 스캔 실패: {}", e)))?;

        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(format!("사용자 커서 오류: {}", e)))?
        {
            let user = self.to_entity(document)?;
            if user.email == email {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    async fn find_by_confirmation_token(&self, token: &str) -> Result<Option<User>, AppError> {
        let document = self
            .collection()
            .find_one(doc! { "confirmation_token": token })
            .await
            .map_err(|e| AppError::DatabaseError(format!("인증 토큰 조회 실패: {}", e)))?;

        document.map(|d| self.to_entity(d)).transpose()
    }

    async fn confirm_account(&self, id: i64) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "is_confirmed": true, "confirmation_token": Bson::Null } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(format!("계정 인증 갱신 실패: {}", e)))?;
        Ok(())
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "password_hash": password_hash } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(format!("비밀번호 갱신 실패: {}", e)))?;
        Ok(())
    }

    async fn get_credit(&self, id: i64) -> Result<Option<i64>, AppError> {
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(format!("크레딧 조회 실패: {}", e)))?;

        Ok(document.map(|d| d.credit))
    }

    async fn increment_credit(&self, id: i64, amount: i64) -> Result<Option<i64>, AppError> {
        let updated = self
            .collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$inc": { "credit": amount } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(format!("크레딧 증가 실패: {}", e)))?;

        Ok(updated.map(|d| d.credit))
    }

    async fn decrement_credit(&self, id: i64, amount: i64) -> Result<DecrementOutcome, AppError> {
        // "잔액 >= 금액"일 때만 감소하는 조건부 갱신 한 문장.
        // MongoDB가 문서 단위 원자성을 보장하므로 동시 요청이
        // 잔액을 음수로 만들 수 없습니다.
        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "_id": id, "credit": { "$gte": amount } },
                doc! { "$inc": { "credit": -amount } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(format!("크레딧 감소 실패: {}", e)))?;

        match updated {
            Some(document) => Ok(DecrementOutcome::Applied(document.credit)),
            None => {
                // 필터 불일치: 사용자 없음과 잔액 부족을 구분합니다
                if self.get_credit(id).await?.is_some() {
                    Ok(DecrementOutcome::Insufficient)
                } else {
                    Ok(DecrementOutcome::NotFound)
                }
            }
        }
    }
}
