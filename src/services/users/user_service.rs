//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 UserService 패턴을 참고하여 설계되었으며,
//! 회원가입, 이메일 인증, 로그인, 비밀번호 리셋의 흐름을 조율합니다.
//!
//! ## 보안 설계 원칙
//!
//! ### 1. 비밀번호 보안
//!
//! - **bcrypt 해싱** (cost 12): 적응형 해시로 무차별 대입 공격 방지
//! - **솔트 자동 생성**: 레인보우 테이블 공격 방지
//!
//! ### 2. 계정 열거 방지
//!
//! - 로그인 실패는 "이메일 없음"과 "비밀번호 틀림"을 구분하지 않고
//!   동일하게 `InvalidCredentials`로 응답합니다
//! - 비밀번호 리셋 요청은 이메일 존재 여부와 무관하게 항상
//!   성공으로 응답합니다
//!
//! ### 3. 개인정보 보호
//!
//! - 이메일은 리포지토리 경계에서 AES-256-GCM으로 암호화되어 저장됩니다
//! - 로그에는 마스킹된 이메일만 남습니다

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::users::{NewUser, User};
use crate::errors::AppError;
use crate::repositories::users::UserRepository;
use crate::services::auth::{ResetTokenService, TokenService};
use crate::services::crypto::PasswordService;
use crate::services::email::Mailer;
use crate::utils::string_utils::mask_email;

/// 로그인 성공 결과
///
/// 핸들러가 `LoginResponse` DTO로 변환합니다.
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 협력자는 생성자에서 명시적으로 주입됩니다.
/// 전역 상태나 정적 주입은 사용하지 않습니다.
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    hasher: Arc<PasswordService>,
    token_service: Arc<TokenService>,
    reset_token_service: Arc<ResetTokenService>,
    mailer: Arc<dyn Mailer>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        hasher: Arc<PasswordService>,
        token_service: Arc<TokenService>,
        reset_token_service: Arc<ResetTokenService>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            token_service,
            reset_token_service,
            mailer,
        }
    }

    /// 신규 사용자를 등록합니다.
    ///
    /// 비밀번호를 bcrypt로 해싱하고, 일회성 인증 토큰을 발급한 뒤
    /// 미인증 상태(크레딧 0)로 저장합니다. 인증 링크는 Mailer를 통해
    /// 전달됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateEmail` - 이미 등록된 이메일
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        // 랜덤 암호화 탓에 저장소의 유니크 제약으로는 중복을 걸러낼 수
        // 없으므로 여기서 복호화-비교 조회로 확인합니다.
        if self.user_repo.find_by_email(email).await?.is_some() {
            log::warn!("중복 이메일로 회원가입 시도: {}", mask_email(email));
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash_password(password)?;
        let confirmation_token = Uuid::new_v4().to_string();

        let user = self
            .user_repo
            .insert(NewUser {
                email: email.to_string(),
                password_hash,
                confirmation_token: confirmation_token.clone(),
            })
            .await?;

        self.mailer
            .send_confirmation_email(email, &confirmation_token)
            .await?;

        log::info!("신규 사용자 등록됨: ID {}, {}", user.id, mask_email(email));
        Ok(user)
    }

    /// 이메일 인증 토큰으로 계정을 활성화합니다.
    ///
    /// 이미 인증된 계정에 대해서는 멱등하게 성공을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UserNotFound` - 토큰에 해당하는 계정 없음
    pub async fn confirm_email(&self, confirmation_token: &str) -> Result<(), AppError> {
        let user = self
            .user_repo
            .find_by_confirmation_token(confirmation_token)
            .await?
            .ok_or(AppError::UserNotFound)?;

        if !user.is_confirmed {
            self.user_repo.confirm_account(user.id).await?;
            log::info!("사용자 {} 이메일 인증 완료", user.id);
        }
        Ok(())
    }

    /// 이메일/비밀번호로 로그인하고 베어러 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidCredentials` - 이메일 없음 또는 비밀번호 불일치
    ///   (두 경우를 구분하지 않습니다)
    /// * `AppError::AccountNotConfirmed` - 미인증 계정
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 (사용자 없음): {}", mask_email(email));
                return Err(AppError::InvalidCredentials);
            }
        };

        if !self.hasher.verify_password(password, &user.password_hash) {
            log::warn!("로그인 실패 (비밀번호 불일치): 사용자 {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        if !user.can_authenticate() {
            log::warn!("로그인 실패 (미인증 계정): 사용자 {}", user.id);
            return Err(AppError::AccountNotConfirmed);
        }

        let token = self.token_service.issue_token(&user.email, user.id)?;

        log::info!("사용자 {} 로그인 성공", user.id);
        Ok(LoginOutcome { token, user })
    }

    /// 비밀번호 리셋을 요청합니다.
    ///
    /// 계정 열거 방지를 위해 이메일 존재 여부와 무관하게 성공을
    /// 반환합니다. 계정이 있으면 리셋 토큰을 생성해 전달합니다.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        match self.user_repo.find_by_email(email).await? {
            Some(user) => {
                let plain_token = self.reset_token_service.create(user.id).await?;
                self.mailer
                    .send_password_reset_email(email, &plain_token)
                    .await?;
            }
            None => {
                log::info!("미등록 이메일의 리셋 요청: {}", mask_email(email));
            }
        }
        Ok(())
    }

    /// 리셋 토큰을 소비하고 새 비밀번호를 설정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ResetTokenNotFound` / `ResetTokenExpired` - 토큰 무효
    pub async fn reset_password(
        &self,
        plain_token: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user_id = self.reset_token_service.consume(plain_token).await?;

        let password_hash = self.hasher.hash_password(new_password)?;
        self.user_repo
            .update_password_hash(user_id, &password_hash)
            .await?;

        log::info!("사용자 {} 비밀번호 리셋 완료", user_id);
        Ok(())
    }

    /// ID로 사용자를 조회합니다.
    pub async fn get_user(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}
