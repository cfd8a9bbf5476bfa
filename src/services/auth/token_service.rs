//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 상태 없는 인증 시스템을 제공합니다.
//! 베어러 토큰의 발급과 검증을 담당하며, 서버 측 세션 상태는 없습니다.
//! 유효성은 전적으로 토큰 내용과 현재 시각으로부터 계산됩니다.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA512 서명을 사용하여 주체(이메일), 숫자 사용자 ID,
/// 발급/만료 시각을 담은 자기완결적 베어러 토큰을 생성하고 검증합니다.
/// 철회 목록은 없으며, 발급된 토큰은 TTL이 다할 때까지 유효합니다.
pub struct TokenService {
    config: JwtConfig,
}

impl TokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// JWT 베어러 토큰을 발급합니다.
    ///
    /// # Arguments
    ///
    /// * `email` - 토큰 주체 (sub 클레임)
    /// * `user_id` - 숫자 사용자 ID
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 서명된 JWT 토큰 (iat = 지금, exp = 지금 + TTL)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn issue_token(&self, email: &str, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + self.config.ttl;

        let claims = TokenClaims {
            sub: email.to_string(),
            user_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let header = Header::new(Algorithm::HS512);
        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());

        encode(&header, &claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// 서명 불일치, 구조 오류, 만료 중 어느 하나라도 실패하면
    /// 도메인 에러로 변환되어 반환됩니다. 패닉하지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료된 토큰
    /// * `AppError::TokenInvalid` - 서명/구조가 잘못된 토큰
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_ref());
        let validation = Validation::new(Algorithm::HS512);

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenInvalid(e.to_string()),
            })
    }

    /// 토큰으로부터 숫자 사용자 ID를 추출합니다.
    ///
    /// 전체 검증(서명, 구조, 만료)을 통과한 경우에만 ID를 반환합니다.
    pub fn extract_user_id(&self, token: &str) -> Result<i64, AppError> {
        let claims = self.verify_token(token)?;
        Ok(claims.user_id)
    }

    /// Bearer 토큰에서 실제 토큰 부분을 추출합니다.
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서
    /// 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenInvalid` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::TokenInvalid("유효하지 않은 인증 헤더 형식".to_string()))
    }
}
