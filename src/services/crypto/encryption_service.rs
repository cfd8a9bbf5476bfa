//! # 필드 암호화 서비스 구현
//!
//! 저장 시점 개인정보(이메일) 보호를 위한 인증 대칭 암호화를 제공합니다.
//! Spring의 `EncryptionService` 빈과 동일한 역할을 수행하며,
//! AES-256-GCM과 호출마다 새로 생성되는 랜덤 nonce를 사용합니다.
//!
//! ## 암호문 포맷
//!
//! ```text
//! base64( nonce(12바이트) ∥ ciphertext ∥ tag(16바이트) )
//! ```
//!
//! nonce와 인증 태그는 암호문과 함께 하나의 불투명 blob으로 운반되어
//! 텍스트 컬럼에 그대로 저장할 수 있습니다.
//!
//! ## 주의
//!
//! 랜덤 nonce 때문에 같은 평문을 두 번 암호화하면 서로 다른 암호문이
//! 생성됩니다. 따라서 암호문 동등 비교로 검색할 수 없으며,
//! 이메일 조회는 후보 전체를 복호화해 비교해야 합니다
//! (리포지토리 계층에 문서화된 확장성 한계).

use aes_gcm::{
    Aes256Gcm, Key, Nonce,
    aead::{Aead, AeadCore, KeyInit, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::config::EncryptionConfig;
use crate::errors::{AppError, ErrorContext};

/// GCM nonce 길이 (96비트)
const GCM_NONCE_LENGTH: usize = 12;
/// GCM 인증 태그 길이 (128비트)
const GCM_TAG_LENGTH: usize = 16;

/// 이메일 필드 암호화 서비스
///
/// 키는 프로세스 시작 시 한 번 제공되며 정확히 32바이트여야 합니다.
/// 이 서비스는 요청 범위 상태를 갖지 않는 순수 컴포넌트입니다.
pub struct EncryptionService {
    cipher: Aes256Gcm,
}

impl EncryptionService {
    /// 새 암호화 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 키가 32바이트가 아닌 경우
    ///   (시작 단계의 치명적 오류)
    pub fn new(config: &EncryptionConfig) -> Result<Self, AppError> {
        if config.key.len() != 32 {
            return Err(AppError::ConfigurationError(format!(
                "Encryption key must be 32 bytes long for AES-256, got {}",
                config.key.len()
            )));
        }

        let key = Key::<Aes256Gcm>::from_slice(&config.key);
        Ok(Self {
            cipher: Aes256Gcm::new(key),
        })
    }

    /// 평문을 암호화하여 base64 blob으로 반환합니다.
    ///
    /// 호출마다 새 랜덤 nonce를 생성하므로 같은 평문이라도
    /// 매번 다른 암호문이 반환됩니다.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, AppError> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .context("이메일 암호화 실패")?;

        // nonce ∥ ciphertext∥tag 를 하나의 blob으로 합칩니다
        let mut payload = Vec::with_capacity(GCM_NONCE_LENGTH + ciphertext.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&ciphertext);

        Ok(BASE64.encode(payload))
    }

    /// base64 blob을 복호화하여 평문을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DecryptionFailed` - 변조, 잘못된 키, 절단, base64 오류 등
    ///   어떤 실패에서도 패닉하지 않으며, 부분 복호화 결과를 반환하지 않습니다.
    pub fn decrypt(&self, payload_base64: &str) -> Result<String, AppError> {
        let payload = BASE64
            .decode(payload_base64)
            .map_err(|_| AppError::DecryptionFailed)?;

        // 최소한 nonce + tag 길이는 있어야 합니다
        if payload.len() < GCM_NONCE_LENGTH + GCM_TAG_LENGTH {
            return Err(AppError::DecryptionFailed);
        }

        let (nonce_bytes, ciphertext) = payload.split_at(GCM_NONCE_LENGTH);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| AppError::DecryptionFailed)?;

        String::from_utf8(plaintext).map_err(|_| AppError::DecryptionFailed)
    }

    /// Option 통과 암호화 (None -> None)
    pub fn encrypt_opt(&self, plaintext: Option<&str>) -> Result<Option<String>, AppError> {
        plaintext.map(|p| self.encrypt(p)).transpose()
    }

    /// Option 통과 복호화 (None -> None)
    pub fn decrypt_opt(&self, payload: Option<&str>) -> Result<Option<String>, AppError> {
        payload.map(|p| self.decrypt(p)).transpose()
    }
}
